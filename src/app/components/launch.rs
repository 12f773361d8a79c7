//! Launch summary card.

use dioxus::prelude::*;

use crate::app::api::{LaunchQuery, SpaceXApi};
use crate::app::fetch::{use_fetch, FetchState};

/// Fetches and shows one launch: mission, flight number and launch site.
#[component]
pub fn Launch(query: LaunchQuery) -> Element {
    let api = use_context::<SpaceXApi>();
    let launch = use_fetch("launch", move || async move { api.launch(query).await });

    let state = launch.read().clone();
    match state {
        FetchState::Loading => rsx! {
            p { "Loading launch..." }
        },
        FetchState::Failed(message) => rsx! {
            p { class: "fetch-error", "{message}" }
        },
        FetchState::Loaded(launch) => {
            let launch_date = launch
                .launch_date_utc
                .map(|d| d.format("%B %-d, %Y %H:%M UTC").to_string());

            rsx! {
                div { class: "view-checklist",
                    h2 { class: "launch-name", "{launch.mission_name}" }
                    p {
                        strong { "Flight Number" }
                        " {launch.flight_number}"
                    }
                    p {
                        strong { "Launch Site" }
                        " {launch.launch_site.site_name_long}"
                    }
                    if let Some(date) = launch_date {
                        p {
                            strong { "Launch Date" }
                            " {date}"
                        }
                    }
                }
            }
        }
    }
}
