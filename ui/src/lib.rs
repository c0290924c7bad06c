//! Shared UI crate for the LearnAdmin dashboard. Widget logic, views and
//! localization live here; `web` and `desktop` only launch them.

use dioxus::prelude::*;

pub mod activity;
pub mod charts;
pub mod core;
pub mod i18n;
pub mod reports;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use activity::ActivityLogViewer;
pub use reports::{DashboardCharts, ReportSparklines};

/// Shared theme, linked by the web launcher and inlined by the desktop one.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
