//! Historical event list and detail pane.

use dioxus::prelude::*;

use crate::app::api::HistoryEvent;
use crate::app::Route;

/// Shown in the detail pane until an existing event is selected
pub const NO_SELECTION_MESSAGE: &str = ".. select an event!";

/// Flight number line for the detail pane
pub fn flight_number_label(flight_number: Option<u32>) -> String {
    match flight_number {
        Some(n) => format!("Flight Number: {}", n),
        None => "No Flight Number".to_string(),
    }
}

/// Titles of all events, each linking to its detail route.
#[component]
pub fn EventList(events: Vec<HistoryEvent>) -> Element {
    rsx! {
        div { class: "view-events",
            h3 { "Historical Events" }
            ul { class: "event-list",
                for event in events.iter() {
                    li { class: "event-post", key: "{event.id}",
                        Link {
                            class: "text_link",
                            to: Route::EventDetail { event_id: event.id.to_string() },
                            "{event.title}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EventDetails(#[props(!optional)] event: Option<HistoryEvent>) -> Element {
    let Some(event) = event else {
        return rsx! {
            h3 { "{NO_SELECTION_MESSAGE}" }
        };
    };

    let flight_class = if event.flight_number.is_some() {
        "flight-number"
    } else {
        "flight-number none"
    };
    let flight_label = flight_number_label(event.flight_number);
    let event_date = event
        .event_date_utc
        .map(|d| d.format("%B %-d, %Y").to_string());

    rsx! {
        h3 { "{event.title}" }
        div { class: "{flight_class}", "{flight_label}" }
        if let Some(date) = event_date {
            p { class: "event-date", "{date}" }
        }
        if let Some(details) = &event.details {
            p { class: "event-details", "{details}" }
        }
        ul { class: "event-links",
            if let Some(article) = &event.links.article {
                li {
                    a { class: "text_link", href: "{article}", "SpaceX Article" }
                }
            }
            if let Some(wikipedia) = &event.links.wikipedia {
                li {
                    a { class: "text_link", href: "{wikipedia}", "Wiki Article" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_number_label_variants() {
        assert_eq!(flight_number_label(Some(4)), "Flight Number: 4");
        assert_eq!(flight_number_label(None), "No Flight Number");
    }
}
