//! Report-driven widgets: the dashboard charts and the metric sparklines.

mod dashboard;
pub mod datasets;
pub mod snapshot;
pub mod source;
mod sparklines;
pub mod trend;

pub use dashboard::DashboardCharts;
pub use snapshot::{MetricKey, MetricReading, ReportSnapshot};
pub use sparklines::ReportSparklines;
