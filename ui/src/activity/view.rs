use dioxus::prelude::*;

use super::export::{export_activity, ExportStatus};
use super::filter::{self, FilterState};
use super::kpi::{self, ActivitySummary};
use super::record::{display_time, ActivityRecord};
use super::source::load_activity;
use crate::charts::{CanvasSlot, ChartCanvas};
use crate::core::config::DashboardConfig;
use crate::core::platform;
use crate::core::request::RequestGeneration;
use crate::core::timing;
use crate::core::tween::AnimatedNumber;
use crate::t;

/// Activity log table with filters, KPI cards, two charts and CSV export.
#[component]
pub fn ActivityLogViewer() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    let mut records = use_signal(Vec::<ActivityRecord>::new);
    let mut loaded = use_signal(|| false);
    let mut filter_state = use_signal(FilterState::default);
    let mut generation = use_signal(RequestGeneration::new);
    let mut bar_slot = use_signal(|| CanvasSlot::new("actionsBar"));
    let mut pie_slot = use_signal(|| CanvasSlot::new("typePie"));
    let mut last_top_user = use_signal(String::new);
    let mut top_user_flashes = use_signal(|| 0_u32);
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    use_future(move || {
        let config = config.clone();
        async move {
            let ticket = generation.write().issue();
            let activity = load_activity(&config).await;
            if !generation.peek().is_current(ticket) {
                tracing::debug!("discarding stale activity load");
                return;
            }
            tracing::debug!(
                count = activity.records.len(),
                origin = ?activity.origin,
                "activity records ready"
            );
            records.set(activity.records);
            loaded.set(true);
        }
    });

    use_effect(move || {
        if !loaded() {
            return;
        }
        let all = records.read();
        let today = timing::today_utc();
        let summary = ActivitySummary::derive(&all, &filter_state.read(), today);
        let basis = summary.basis(&all);

        let (days, per_day) = kpi::daily_counts(basis, today);
        bar_slot.write().update_or_bind(kpi::daily_bar_config(
            &t!("activity-chart-series"),
            days,
            per_day,
        ));
        let (actions, per_action) = kpi::action_breakdown(basis);
        pie_slot
            .write()
            .update_or_bind(kpi::action_pie_config(actions, per_action));

        let top = summary.kpis.top_user;
        if *last_top_user.peek() != top {
            last_top_user.set(top);
            *top_user_flashes.write() += 1;
        }
    });

    let all = records.read();
    let current_filter = filter_state();
    let ActivitySummary { rows, kpis, .. } =
        ActivitySummary::derive(&all, &current_filter, timing::today_utc());
    let users = filter::distinct_users(&all);
    let actions = filter::distinct_actions(&all);
    drop(all);

    let top_user_class = match top_user_flashes() {
        0 => "kpi-card__value kpi-card__value--text",
        n if n % 2 == 1 => "kpi-card__value kpi-card__value--text fade-update",
        _ => "kpi-card__value kpi-card__value--text fade-update fade-update--again",
    };

    let table_rows: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.user.clone(),
                r.action.clone(),
                r.entity.clone(),
                r.description.clone(),
                display_time(r),
            ]
        })
        .collect();
    let show_empty = loaded() && table_rows.is_empty();

    let export_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);
            let export_records = filter::export_rows(&records.read(), &filter_state.read());
            platform::spawn_future(async move {
                match export_activity(export_records).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => {
                        tracing::error!("activity export failed: {err}");
                        status_signal.set(ExportStatus::Error(err));
                    }
                }
                busy_signal.set(false);
            });
        }
    };

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("export-status".to_string(), t!("export-working"))),
        ExportStatus::Done(message) => Some(("export-status export-status--success".to_string(), message)),
        ExportStatus::Error(err) => Some((
            "export-status export-status--error".to_string(),
            t!("export-failed", reason = err),
        )),
    };

    rsx! {
        section { class: "activity-log",
            div { class: "kpi-grid",
                div { class: "kpi-card",
                    span { class: "kpi-card__label", {t!("activity-kpi-total")} }
                    AnimatedNumber { id: "kpiTotal", target: kpis.total as i64 }
                }
                div { class: "kpi-card",
                    span { class: "kpi-card__label", {t!("activity-kpi-top-user")} }
                    strong { id: "kpiTopUser", class: "{top_user_class}", "{kpis.top_user}" }
                }
                div { class: "kpi-card",
                    span { class: "kpi-card__label", {t!("activity-kpi-adds-today")} }
                    AnimatedNumber { id: "kpiAddsToday", target: kpis.adds_today as i64 }
                }
                div { class: "kpi-card",
                    span { class: "kpi-card__label", {t!("activity-kpi-deletes-today")} }
                    AnimatedNumber { id: "kpiDeletesToday", target: kpis.deletes_today as i64 }
                }
            }

            div { class: "chart-grid",
                div { class: "chart-card",
                    h3 { class: "chart-card__title", {t!("activity-chart-daily")} }
                    ChartCanvas { slot: bar_slot() }
                }
                div { class: "chart-card",
                    h3 { class: "chart-card__title", {t!("activity-chart-actions")} }
                    ChartCanvas { slot: pie_slot(), class: "chart-canvas chart-canvas--round" }
                }
            }

            div { class: "activity-filters",
                input {
                    id: "search",
                    r#type: "search",
                    class: "activity-filters__search",
                    placeholder: t!("activity-search-placeholder"),
                    value: "{current_filter.query}",
                    oninput: move |evt: FormEvent| filter_state.write().query = evt.value(),
                }
                select {
                    id: "filterUser",
                    value: "{current_filter.user}",
                    oninput: move |evt: FormEvent| filter_state.write().user = evt.value(),
                    option { value: "", {t!("activity-filter-all-users")} }
                    for user in users.into_iter() {
                        option { key: "{user}", value: "{user}", "{user}" }
                    }
                }
                select {
                    id: "filterType",
                    value: "{current_filter.action}",
                    oninput: move |evt: FormEvent| filter_state.write().action = evt.value(),
                    option { value: "", {t!("activity-filter-all-actions")} }
                    for action in actions.into_iter() {
                        option { key: "{action}", value: "{action}", "{action}" }
                    }
                }
                label { class: "activity-filters__date",
                    span { {t!("activity-filter-from")} }
                    input {
                        id: "dateFrom",
                        r#type: "date",
                        oninput: move |evt: FormEvent| {
                            filter_state.write().date_from = filter::parse_date_input(&evt.value())
                        },
                    }
                }
                label { class: "activity-filters__date",
                    span { {t!("activity-filter-to")} }
                    input {
                        id: "dateTo",
                        r#type: "date",
                        oninput: move |evt: FormEvent| {
                            filter_state.write().date_to = filter::parse_date_input(&evt.value())
                        },
                    }
                }
                button {
                    id: "exportCsv",
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: export_handler,
                    {t!("activity-export")}
                }
                if let Some((class_name, message)) = feedback {
                    span { class: "{class_name}", "{message}" }
                }
            }

            table { id: "activityTable", class: "activity-table",
                thead {
                    tr {
                        th { {t!("activity-col-user")} }
                        th { {t!("activity-col-action")} }
                        th { {t!("activity-col-entity")} }
                        th { {t!("activity-col-description")} }
                        th { {t!("activity-col-time")} }
                    }
                }
                tbody {
                    if show_empty {
                        tr {
                            td { colspan: "5", class: "activity-table__empty", {t!("activity-no-results")} }
                        }
                    }
                    for (index, cells) in table_rows.into_iter().enumerate() {
                        tr { key: "{index}",
                            for cell in cells.into_iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
