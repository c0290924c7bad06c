use dioxus::prelude::*;

use super::geometry::{self, Plot};
use super::handle::{CanvasSlot, ChartConfig, ChartKind};
use crate::core::format;

/// Nominal drawing width; bars and lines are laid out against it and scaled by CSS.
const VIEW_WIDTH: f64 = 320.0;

/// Renders whatever chart the slot currently owns into an element carrying the
/// slot's canvas id. An empty slot renders an empty container.
#[component]
pub fn ChartCanvas(slot: CanvasSlot, class: Option<String>) -> Element {
    let class = class.unwrap_or_else(|| "chart-canvas".to_string());
    let canvas_id = slot.canvas_id().to_string();

    let Some(handle) = slot.handle() else {
        return rsx! {
            div { id: "{canvas_id}", class: "{class} chart-canvas--empty" }
        };
    };
    let serial = handle.serial();
    let revision = handle.revision();
    let config = handle.config().clone();

    let body = match config.kind {
        ChartKind::Bar => render_bars(&config),
        ChartKind::Pie | ChartKind::Doughnut => render_arcs(&config),
        ChartKind::Line => render_line(&config),
    };
    let legend = config.options.show_legend.then(|| render_legend(&config));

    rsx! {
        div {
            id: "{canvas_id}",
            class: "{class}",
            "data-chart": "{serial}",
            "data-revision": "{revision}",
            {body}
            if let Some(legend) = legend {
                {legend}
            }
        }
    }
}

struct PositionedBox {
    style: String,
    title: String,
}

fn render_bars(config: &ChartConfig) -> Element {
    let options = &config.options;
    let height = options.height;
    let plot = Plot::new(VIEW_WIDTH, height).padded(0.0, 0.0, 6.0, 18.0);
    let series: Vec<&[f64]> = config.datasets.iter().map(|d| d.data.as_slice()).collect();
    let slots = config.labels.len();
    let thickness = config.datasets.iter().find_map(|d| d.bar_thickness);
    let ceiling = geometry::value_ceiling(&series, options.stacked, slots);

    let pct_x = |v: f64| v / VIEW_WIDTH * 100.0;
    let pct_y = |v: f64| v / height * 100.0;
    let slot_width = if slots > 0 { 100.0 / slots as f64 } else { 0.0 };
    let label_top = pct_y(plot.baseline());

    let grid_rows: Vec<PositionedBox> = if options.show_y_grid {
        (0..=4)
            .map(|step| {
                let fraction = f64::from(step) / 4.0;
                let y = plot.baseline() - plot.inner_height() * fraction;
                PositionedBox {
                    style: format!("top: {:.3}%;", pct_y(y)),
                    title: format::format_number(ceiling * fraction),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let grid_cols: Vec<String> = if options.show_x_grid {
        (0..slots)
            .map(|i| {
                format!(
                    "left: {:.3}%; width: {slot_width:.3}%; height: {label_top:.3}%;",
                    slot_width * i as f64
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let bars: Vec<PositionedBox> =
        geometry::bar_layout(&plot, slots, &series, options.stacked, thickness)
            .into_iter()
            .map(|rect| {
                let dataset = &config.datasets[rect.dataset];
                let label = config.labels.get(rect.index).map(String::as_str).unwrap_or("");
                let value = format::format_number(rect.value);
                let title = if !options.tooltips {
                    String::new()
                } else if let Some(series_label) = dataset.label.as_deref() {
                    format!("{label} · {series_label}: {value}")
                } else {
                    format!("{label}: {value}")
                };
                let style = format!(
                    "left: {:.3}%; top: {:.3}%; width: {:.3}%; height: {:.3}%; background: {}; border-radius: {}px;",
                    pct_x(rect.x),
                    pct_y(rect.y),
                    pct_x(rect.width),
                    pct_y(rect.height),
                    dataset.color_at(0),
                    dataset.border_radius.unwrap_or(0.0),
                );
                PositionedBox { style, title }
            })
            .collect();

    let labels: Vec<PositionedBox> = config
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| PositionedBox {
            style: format!(
                "left: {:.3}%; width: {slot_width:.3}%; top: {label_top:.3}%;",
                slot_width * i as f64
            ),
            title: label.clone(),
        })
        .collect();

    let show_ticks = options.show_y_ticks;
    let frame_style = format!("height: {height}px;");

    rsx! {
        div { class: "chart-bars", style: "{frame_style}",
            for row in grid_rows.into_iter() {
                div { class: "chart-bars__grid-row", style: "{row.style}",
                    if show_ticks {
                        span { class: "chart-bars__tick", "{row.title}" }
                    }
                }
            }
            for col in grid_cols.into_iter() {
                div { class: "chart-bars__grid-col", style: "{col}" }
            }
            for bar in bars.into_iter() {
                div { class: "chart-bars__bar", title: "{bar.title}", style: "{bar.style}" }
            }
            for label in labels.into_iter() {
                span { class: "chart-bars__label", style: "{label.style}", "{label.title}" }
            }
        }
    }
}

struct ArcShape {
    path: String,
    fill: String,
}

fn render_arcs(config: &ChartConfig) -> Element {
    let size = config.options.height;
    let center = size / 2.0;
    let radius = size / 2.0 - 2.0;
    let cutout = match config.kind {
        ChartKind::Doughnut => config.options.cutout,
        _ => 0.0,
    };
    let Some(dataset) = config.datasets.first() else {
        return rsx! {};
    };
    let shapes: Vec<ArcShape> = geometry::arc_segments(&dataset.data, center, center, radius, cutout)
        .into_iter()
        .map(|segment| ArcShape {
            fill: dataset.color_at(segment.index).to_string(),
            path: segment.path,
        })
        .collect();
    let stroke = if dataset.border_width > 0.0 { "#ffffff" } else { "none" };
    let stroke_width = dataset.border_width;
    let view_box = format!("0 0 {size} {size}");

    rsx! {
        svg {
            class: "chart-arcs",
            view_box: "{view_box}",
            width: "{size}",
            height: "{size}",
            for shape in shapes.into_iter() {
                path {
                    d: "{shape.path}",
                    fill: "{shape.fill}",
                    stroke: "{stroke}",
                    stroke_width: "{stroke_width}",
                }
            }
        }
    }
}

struct LineShape {
    line: String,
    area: Option<String>,
    stroke: String,
    fill: String,
    width: f64,
}

fn render_line(config: &ChartConfig) -> Element {
    let height = config.options.height;
    let plot = Plot::new(VIEW_WIDTH, height).padded(1.0, 1.0, 2.0, 2.0);
    let tension = config.options.tension;

    let shapes: Vec<LineShape> = config
        .datasets
        .iter()
        .map(|dataset| {
            let points = geometry::line_points(&plot, &dataset.data);
            LineShape {
                line: geometry::line_path(&points, tension),
                area: dataset
                    .fill
                    .then(|| geometry::area_path(&plot, &points, tension)),
                stroke: dataset
                    .border_color
                    .clone()
                    .unwrap_or_else(|| dataset.color_at(0).to_string()),
                fill: dataset.color_at(0).to_string(),
                width: dataset.border_width,
            }
        })
        .collect();
    let view_box = format!("0 0 {VIEW_WIDTH} {height}");

    rsx! {
        svg {
            class: "chart-line",
            view_box: "{view_box}",
            preserve_aspect_ratio: "none",
            height: "{height}",
            for shape in shapes.into_iter() {
                g {
                    if let Some(area) = shape.area {
                        path { d: "{area}", fill: "{shape.fill}", stroke: "none" }
                    }
                    path {
                        d: "{shape.line}",
                        fill: "none",
                        stroke: "{shape.stroke}",
                        stroke_width: "{shape.width}",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
        }
    }
}

fn render_legend(config: &ChartConfig) -> Element {
    let entries: Vec<(String, String)> = match config.kind {
        ChartKind::Pie | ChartKind::Doughnut => {
            let palette = config.datasets.first();
            config
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let color = palette.map(|d| d.color_at(i).to_string()).unwrap_or_default();
                    (label.clone(), format!("background: {color};"))
                })
                .collect()
        }
        _ => config
            .datasets
            .iter()
            .filter_map(|d| {
                d.label
                    .clone()
                    .map(|label| (label, format!("background: {};", d.color_at(0))))
            })
            .collect(),
    };

    rsx! {
        ul { class: "chart-legend",
            for (label, swatch) in entries.into_iter() {
                li { class: "chart-legend__item",
                    span { class: "chart-legend__swatch", style: "{swatch}" }
                    span { class: "chart-legend__label", "{label}" }
                }
            }
        }
    }
}
