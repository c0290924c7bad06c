use dioxus::prelude::*;

use crate::reports::{DashboardCharts, ReportSparklines};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "page__lead", {t!("dashboard-lead")} }

            ReportSparklines {}
            DashboardCharts {}
        }
    }
}
