//! Events view.
//!
//! [`EventsView`] fetches the history list once per mount and keeps it while
//! the path moves between events. The routed [`EventSelection`] below it only
//! renders the detail pane for the event named in the path (if any).

use dioxus::prelude::*;

use crate::app::api::{find_event, HistoryEvent, SpaceXApi};
use crate::app::components::{EventDetails, EventList};
use crate::app::fetch::{use_fetch, FetchState};
use crate::app::Route;

/// History list loaded by the mounted [`EventsView`]
#[derive(Clone, Copy)]
pub struct EventFeed(pub Signal<FetchState<Vec<HistoryEvent>>>);

#[component]
pub fn EventsView() -> Element {
    let api = use_context::<SpaceXApi>();
    let events = use_fetch("history", move || async move { api.history().await });
    use_context_provider(|| EventFeed(events));

    let state = events.read().clone();
    match state {
        FetchState::Loading => rsx! {
            p { "Loading Events Posts..." }
        },
        // No partial rendering: the message replaces the whole view
        FetchState::Failed(message) => rsx! {
            p { class: "fetch-error", "{message}" }
        },
        FetchState::Loaded(events) => rsx! {
            div { class: "view-events row",
                div { class: "column", style: "width:45%;padding:5px;",
                    EventList { events: events }
                }
                div { class: "column", style: "width:55%;padding:5px;",
                    Outlet::<Route> {}
                }
            }
        },
    }
}

/// Detail pane for the selected event
#[component]
pub fn EventSelection(
    /// Raw `:event_id` path segment
    #[props(!optional)]
    event_id: Option<String>,
) -> Element {
    let EventFeed(events) = use_context::<EventFeed>();

    let selected = match &*events.read() {
        FetchState::Loaded(list) => find_event(list, event_id.as_deref()).cloned(),
        _ => None,
    };

    rsx! {
        EventDetails { event: selected }
    }
}
