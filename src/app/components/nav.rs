//! Top and side navigation.

use dioxus::prelude::*;

use super::theme::ThemeSwitch;
use crate::app::shell_context::use_shell;
use crate::app::Route;
use crate::config::AppConfig;

/// Links shared by the top bar and the side panel
#[component]
fn NavLinks(
    /// External "Source Code" link target
    source_url: String,
    /// Called after any link is chosen
    on_navigate: EventHandler<()>,
) -> Element {
    rsx! {
        li { class: "link", onclick: move |_| on_navigate.call(()),
            Link { class: "text_link", active_class: "active", to: Route::Home {}, "Home" }
        }
        li { class: "link", onclick: move |_| on_navigate.call(()),
            Link { class: "text_link", active_class: "active", to: Route::Events {}, "Events" }
        }
        li { class: "link",
            a { class: "text_link", href: "{source_url}", "Source Code" }
        }
    }
}

/// Hamburger button; renders as a cross while the side nav is open
#[component]
pub fn Hamburger(open: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if open { "hamburger open" } else { "hamburger" },
            "aria-label": "Toggle navigation",
            "aria-expanded": "{open}",
            onclick: move |_| on_click.call(()),
            span {}
            span {}
            span {}
        }
    }
}

/// Top navigation bar with the side-nav toggle.
#[component]
pub fn Topnav() -> Element {
    let shell = use_shell();
    let config = use_context::<AppConfig>();

    rsx! {
        nav { class: "topnav",
            ul { style: "user-select:none;",
                NavLinks { source_url: config.source_url.clone(), on_navigate: move |_| {} }
                li { class: "menu",
                    Hamburger {
                        open: shell.nav_open(),
                        on_click: move |_| shell.toggle_sidenav(!shell.nav_open()),
                    }
                }
            }
        }
    }
}

/// Side navigation; slides in while `nav_open` is set.
#[component]
pub fn Sidenav() -> Element {
    let shell = use_shell();
    let config = use_context::<AppConfig>();

    let open = shell.nav_open();
    let hidden = !open;

    rsx! {
        if open {
            div {
                class: "sidenav-overlay",
                onclick: move |_| shell.toggle_sidenav(false),
            }
        }
        aside {
            class: if open { "sidenav open" } else { "sidenav closed" },
            "aria-hidden": "{hidden}",
            ul {
                NavLinks {
                    source_url: config.source_url.clone(),
                    on_navigate: move |_| shell.toggle_sidenav(false),
                }
            }
            div { class: "sidenav-theme",
                span { "Dark mode" }
                ThemeSwitch {}
            }
        }
    }
}
