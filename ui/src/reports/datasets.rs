//! Chart data for the dashboard, with the built-in datasets used whenever
//! the report payload does not supply one.

use super::snapshot::{MetricKey, MetricReading, ReportSnapshot, SeriesEntry};
use super::trend;
use crate::charts::{hex_to_rgba, ChartConfig, ChartKind, ChartOptions, Dataset};

pub const TRAFFIC_PALETTE: [&str; 3] = ["#43A9D4", "#68D137", "#7256C5"];
pub const TRAFFIC_CUTOUT: f64 = 0.70;
pub const BAR_THICKNESS: f64 = 20.0;
pub const BAR_RADIUS: f64 = 8.0;
pub const SPARKLINE_HEIGHT: f64 = 40.0;
pub const SPARKLINE_TENSION: f64 = 0.35;
const SPARKLINE_FILL_ALPHA: f64 = 0.12;

const DEFAULT_TRAFFIC_LABELS: [&str; 3] = ["بحث عضوي", "إحالات", "وسائل التواصل الاجتماعي"];
const DEFAULT_TRAFFIC_VALUES: [f64; 3] = [4305.0, 482.0, 859.0];
const DEFAULT_MONTHS: [&str; 10] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl TrafficData {
    /// Labels and values each come from the payload when present, else from
    /// the defaults.
    pub fn resolve(snapshot: &ReportSnapshot) -> Self {
        let section = snapshot.traffic();
        Self {
            labels: section.labels.unwrap_or_else(|| {
                DEFAULT_TRAFFIC_LABELS.iter().map(|s| s.to_string()).collect()
            }),
            values: section.values.unwrap_or_else(|| DEFAULT_TRAFFIC_VALUES.to_vec()),
        }
    }

    /// Legend value for row `index`; rows without a value show zero.
    pub fn value_at(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    pub fn chart(&self) -> ChartConfig {
        let dataset = Dataset::new(self.values.clone()).colors(TRAFFIC_PALETTE);
        ChartConfig::new(ChartKind::Doughnut, self.labels.clone(), vec![dataset]).with_options(
            ChartOptions {
                show_legend: false,
                cutout: TRAFFIC_CUTOUT,
                ..ChartOptions::default()
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionData {
    pub labels: Vec<String>,
    pub series: Vec<SeriesEntry>,
}

impl ConversionData {
    pub fn resolve(snapshot: &ReportSnapshot) -> Self {
        let section = snapshot.conversions();
        Self {
            labels: section.labels.unwrap_or_else(|| {
                DEFAULT_MONTHS.iter().map(|s| s.to_string()).collect()
            }),
            series: section.datasets.unwrap_or_else(default_conversion_series),
        }
    }

    /// Stacked bars; values only through tooltips.
    pub fn chart(&self) -> ChartConfig {
        let datasets = self
            .series
            .iter()
            .map(|entry| Dataset {
                label: entry.label.clone(),
                data: entry.data.clone(),
                background: entry.background.clone(),
                border_color: entry.border_color.clone(),
                bar_thickness: Some(BAR_THICKNESS),
                border_radius: Some(BAR_RADIUS),
                ..Dataset::default()
            })
            .collect();
        ChartConfig::new(ChartKind::Bar, self.labels.clone(), datasets).with_options(ChartOptions {
            show_legend: false,
            stacked: true,
            show_x_grid: false,
            show_y_grid: true,
            show_y_ticks: false,
            tooltips: true,
            ..ChartOptions::default()
        })
    }
}

fn default_conversion_series() -> Vec<SeriesEntry> {
    vec![
        SeriesEntry {
            label: Some("Segment 1".to_string()),
            data: vec![35.0, 28.0, 34.0, 32.0, 40.0, 20.0, 45.0, 25.0, 30.0, 35.0],
            background: vec!["#7256C5".to_string()],
            border_color: None,
        },
        SeriesEntry {
            label: Some("Segment 2".to_string()),
            data: vec![45.0, 35.0, 45.0, 48.0, 50.0, 40.0, 55.0, 42.0, 35.0, 40.0],
            background: vec!["#68D137".to_string()],
            border_color: None,
        },
    ]
}

/// Axis-free filled line for one metric card.
pub fn sparkline_chart(key: MetricKey, reading: &MetricReading) -> ChartConfig {
    let series = trend::pad_series(trend::sparkline_series(reading));
    let labels = (1..=series.len()).map(|i| i.to_string()).collect();
    let color = key.color();
    let dataset = Dataset {
        data: series,
        background: vec![hex_to_rgba(color, SPARKLINE_FILL_ALPHA)],
        border_color: Some(color.to_string()),
        fill: true,
        border_width: 2.0,
        ..Dataset::default()
    };
    ChartConfig::new(ChartKind::Line, labels, vec![dataset]).with_options(ChartOptions {
        show_legend: false,
        show_x_grid: false,
        show_y_grid: false,
        show_y_ticks: false,
        show_axes: false,
        tooltips: false,
        tension: SPARKLINE_TENSION,
        height: SPARKLINE_HEIGHT,
        ..ChartOptions::default()
    })
}
