use dioxus::prelude::*;

use super::datasets::sparkline_chart;
use super::snapshot::{MetricKey, ReportSnapshot};
use super::source::load_report;
use super::trend::{change_badge, resolve_change};
use crate::charts::{CanvasSlot, ChartCanvas};
use crate::core::config::DashboardConfig;
use crate::core::format;
use crate::core::request::RequestGeneration;
use crate::t;

const VALUE_PLACEHOLDER: &str = "—";

#[derive(Clone, PartialEq)]
struct MetricCard {
    key: &'static str,
    label: String,
    value: String,
    badge_text: String,
    badge_class: String,
    slot: CanvasSlot,
}

/// KPI cards for every report metric, each with a trend badge and a sparkline.
#[component]
pub fn ReportSparklines() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    let mut generation = use_signal(RequestGeneration::new);
    let mut snapshot = use_signal(|| None::<ReportSnapshot>);
    let mut slots = use_signal(|| {
        MetricKey::ALL.map(|key| CanvasSlot::new(format!("spark-{}", key.as_str())))
    });

    use_future(move || {
        let config = config.clone();
        async move {
            let ticket = generation.write().issue();
            let report = load_report(&config, "report-sparklines").await;
            if !generation.peek().is_current(ticket) {
                tracing::debug!("discarding stale sparkline report");
                return;
            }
            {
                let mut slots = slots.write();
                for (slot, key) in slots.iter_mut().zip(MetricKey::ALL) {
                    slot.bind(sparkline_chart(key, &report.reading(key)));
                }
            }
            snapshot.set(Some(report));
        }
    });

    let current = snapshot();
    let slot_list = slots();
    let cards: Vec<MetricCard> = MetricKey::ALL
        .iter()
        .zip(slot_list)
        .map(|(&key, slot)| {
            let reading = current.as_ref().map(|s| s.reading(key)).unwrap_or_default();
            let badge = change_badge(resolve_change(&reading));
            MetricCard {
                key: key.as_str(),
                label: metric_label(key),
                value: reading
                    .value
                    .map(format::format_number)
                    .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string()),
                badge_text: badge.as_ref().map(|b| b.text.clone()).unwrap_or_default(),
                badge_class: match &badge {
                    Some(b) => format!("trend-badge {}", b.trend.class()),
                    None => "trend-badge".to_string(),
                },
                slot,
            }
        })
        .collect();

    rsx! {
        section { class: "report-cards",
            for card in cards.into_iter() {
                div { key: "{card.key}", class: "report-card",
                    div { class: "report-card__header",
                        span { class: "report-card__label", "{card.label}" }
                        span { class: "{card.badge_class}", "data-key-change": "{card.key}", "{card.badge_text}" }
                    }
                    strong { class: "report-value", "data-key": "{card.key}", "{card.value}" }
                    ChartCanvas { slot: card.slot, class: "sparkline" }
                }
            }
        }
    }
}

fn metric_label(key: MetricKey) -> String {
    match key {
        MetricKey::Students => t!("metric-students"),
        MetricKey::Lessons => t!("metric-lessons"),
        MetricKey::Stories => t!("metric-stories"),
        MetricKey::Words => t!("metric-words"),
        MetricKey::Courses => t!("metric-courses"),
        MetricKey::Teachers => t!("metric-teachers"),
        MetricKey::Notifications => t!("metric-notifications"),
    }
}
