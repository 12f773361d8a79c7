use dioxus::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "404 Page Not Found";

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        h2 { "{NOT_FOUND_MESSAGE}" }
    }
}
