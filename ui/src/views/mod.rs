mod activity;
mod dashboard;

pub use activity::Activity;
pub use dashboard::Dashboard;
