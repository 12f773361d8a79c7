//! Dioxus application entry point.
//!
//! This module provides the root App component: it installs the shared
//! contexts (config, data API, shell state, breakpoint, view loader) and
//! hands the URL to the router.

use dioxus::prelude::*;

pub mod api;
pub mod breakpoint;
pub mod components;
pub mod dispatch;
pub mod fetch;
pub mod loader;
pub mod pages;
pub mod preferences;
pub mod shell_context;
pub mod theme;

use crate::config::{load_config, AppConfig};
use api::SpaceXApi;
use breakpoint::use_breakpoint_provider;
use components::Frame;
use loader::use_view_loader_provider;
use preferences::default_store;
use pages::{EventDetail, Events, EventsLayout, Home, NotFound};
use shell_context::use_shell_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid app config, using defaults: {:#}", e);
            AppConfig::default()
        }
    });

    use_hook(|| {
        tracing::info!(
            "Starting SpaceX site v{} ({})",
            env!("SPACEX_VERSION"),
            env!("SPACEX_GIT_SHA")
        )
    });

    // Explicit handles for every view below the router
    use_context_provider(|| SpaceXApi::new(&config.api_base_url));
    let store = use_hook(default_store);
    use_shell_provider(&config, store);
    use_breakpoint_provider();
    use_view_loader_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes. Order matters: Home, then Events, then the catch-all.
///
/// Both events routes share `EventsLayout`, so picking an event keeps the
/// loaded list mounted and only swaps the detail pane.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        #[route("/")]
        Home {},
        #[layout(EventsLayout)]
            #[route("/events")]
            Events {},
            #[route("/events/:event_id")]
            EventDetail { event_id: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
