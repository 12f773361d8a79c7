//! Application frame: header, routed view, footer and side navigation.

use dioxus::prelude::*;

use super::nav::{Sidenav, Topnav};
use crate::app::breakpoint::use_breakpoint;
use crate::app::dispatch::RouteMatch;
use crate::app::shell_context::use_shell;
use crate::app::Route;

const APP_CSS: Asset = asset!("/public/app.css");

/// Layout wrapping every route. Holds no state of its own; the container
/// class is derived from the breakpoint and theme, e.g. `"medium dark"`.
#[component]
pub fn Frame() -> Element {
    let shell = use_shell();
    let breakpoint = use_breakpoint();
    let current = RouteMatch::from(&use_route::<Route>());

    let css_state = shell.snapshot().css_state(breakpoint.get());

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }

        div { class: "app-container {css_state}",
            main {
                header {
                    Logo {}
                    Topnav {}
                }
                section { class: "view view-{current.view}",
                    Outlet::<Route> {}
                }
                footer {
                    Foot {}
                }
            }
            Sidenav {}
        }
    }
}

#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "logo",
            span { class: "logo-mark", style: "margin-top:-2px;transform:rotate(-90deg);" }
            " "
            span { "SpaceX" }
        }
    }
}

#[component]
pub fn Foot() -> Element {
    let version = env!("SPACEX_VERSION");
    let git_sha = env!("SPACEX_GIT_SHA");

    rsx! {
        small { class: "text-muted", "SpaceX demo v{version} ({git_sha})" }
    }
}
