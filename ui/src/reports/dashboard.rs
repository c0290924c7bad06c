use dioxus::prelude::*;

use super::datasets::{ConversionData, TrafficData, TRAFFIC_PALETTE};
use super::snapshot::ReportSnapshot;
use super::source::load_report;
use crate::charts::{CanvasSlot, ChartCanvas};
use crate::core::config::DashboardConfig;
use crate::core::format;
use crate::core::request::RequestGeneration;
use crate::t;

/// Traffic donut with its legend table, and the stacked conversions chart.
#[component]
pub fn DashboardCharts() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    let mut generation = use_signal(RequestGeneration::new);
    let mut traffic = use_signal(|| None::<TrafficData>);
    let mut traffic_slot = use_signal(|| CanvasSlot::new("trafficChart"));
    let mut conversion_slot = use_signal(|| CanvasSlot::new("barChart"));

    use_future(move || {
        let config = config.clone();
        async move {
            let ticket = generation.write().issue();
            let snapshot = load_report(&config, "dashboard-charts").await;
            if !generation.peek().is_current(ticket) {
                tracing::debug!("discarding stale dashboard report");
                return;
            }
            let traffic_data = TrafficData::resolve(&snapshot);
            traffic_slot.write().bind(traffic_data.chart());
            conversion_slot
                .write()
                .bind(ConversionData::resolve(&snapshot).chart());
            traffic.set(Some(traffic_data));
        }
    });

    let legend_rows: Vec<(String, String, String)> = match traffic() {
        Some(data) => data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                (
                    label.clone(),
                    swatch_style(i),
                    format::format_number(data.value_at(i)),
                )
            })
            .collect(),
        None => TrafficData::resolve(&ReportSnapshot::empty())
            .labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, swatch_style(i), "—".to_string()))
            .collect(),
    };

    rsx! {
        section { class: "dashboard-charts",
            div { class: "chart-card chart-card--traffic",
                h3 { class: "chart-card__title", {t!("dashboard-traffic-title")} }
                div { class: "traffic-layout",
                    ChartCanvas { slot: traffic_slot(), class: "chart-canvas chart-canvas--round" }
                    div { class: "traffic-legend",
                        table {
                            tbody {
                                for (index, (label, swatch, value)) in legend_rows.into_iter().enumerate() {
                                    tr { key: "{index}",
                                        td {
                                            span { class: "traffic-legend__swatch", style: "{swatch}" }
                                            "{label}"
                                        }
                                        td {
                                            span { class: "traffic-legend__value", "{value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "chart-card chart-card--conversions",
                h3 { class: "chart-card__title", {t!("dashboard-conversions-title")} }
                ChartCanvas { slot: conversion_slot() }
            }
        }
    }
}

fn swatch_style(index: usize) -> String {
    format!("background: {};", TRAFFIC_PALETTE[index % TRAFFIC_PALETTE.len()])
}
