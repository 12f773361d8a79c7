//! Home view: the next scheduled launch.

use dioxus::prelude::*;

use crate::app::api::LaunchQuery;
use crate::app::components::Launch;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "view-home",
            h3 { "Next Launch" }
            Launch { query: LaunchQuery::Next }
        }
    }
}
