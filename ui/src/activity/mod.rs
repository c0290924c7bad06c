//! Admin activity log: loading, filtering, KPIs, charts and CSV export.

pub mod export;
pub mod filter;
pub mod kpi;
pub mod record;
pub mod source;
mod view;

pub use record::ActivityRecord;
pub use view::ActivityLogViewer;
