//! Route components.
//!
//! Each routed page hands its view to [`LazyView`], which shows the loading
//! placeholder until the view module is available.

mod events;
mod home;
mod not_found;

use dioxus::prelude::*;

use crate::app::components::LazyView;
use crate::app::dispatch::ViewName;

pub use events::{EventFeed, EventSelection, EventsView};
pub use home::HomeView;
pub use not_found::{NotFoundView, NOT_FOUND_MESSAGE};

/// `/`
#[component]
pub fn Home() -> Element {
    rsx! {
        LazyView { view: ViewName::Home,
            HomeView {}
        }
    }
}

/// Shared by `/events` and `/events/:event_id`
#[component]
pub fn EventsLayout() -> Element {
    rsx! {
        LazyView { view: ViewName::Events,
            EventsView {}
        }
    }
}

/// `/events` and `/events/`
#[component]
pub fn Events() -> Element {
    rsx! {
        EventSelection { event_id: None }
    }
}

/// `/events/:event_id`
#[component]
pub fn EventDetail(event_id: String) -> Element {
    // "/events/" can arrive here with an empty segment
    let event_id = Some(event_id).filter(|id| !id.is_empty());

    rsx! {
        EventSelection { event_id: event_id }
    }
}

/// Any other path
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "no route matched");

    rsx! {
        NotFoundView {}
    }
}
