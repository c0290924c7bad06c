use dioxus::prelude::*;

use crate::activity::ActivityLogViewer;
use crate::t;

#[component]
pub fn Activity() -> Element {
    rsx! {
        section { class: "page page-activity",
            h1 { {t!("activity-title")} }
            p { class: "page__lead", {t!("activity-lead")} }

            ActivityLogViewer {}
        }
    }
}
