//! Suspends a view until the loader has it, then renders it.

use dioxus::prelude::*;

use crate::app::dispatch::ViewName;
use crate::app::loader::ViewLoader;

/// Placeholder shown while a view is first loading
pub const LOADING_MESSAGE: &str = "loading...";

#[component]
pub fn LazyView(
    /// Which view the children belong to
    view: ViewName,
    /// The view itself, mounted once loaded
    children: Element,
) -> Element {
    let loader = use_context::<ViewLoader>();

    let pending = {
        let loader = loader.clone();
        use_resource(move || {
            let loader = loader.clone();
            async move { loader.load(view).await }
        })
    };

    // Already-loaded views render on the first pass, without the placeholder
    let status = loader.ready(view).or_else(|| pending.read().clone());

    match status {
        None => rsx! {
            p { class: "loading", "{LOADING_MESSAGE}" }
        },
        Some(Ok(module)) => rsx! {
            if let Some(title) = module.title {
                document::Title { "{title}" }
            }
            {children}
        },
        Some(Err(e)) => rsx! {
            h2 { class: "load-error", "{e}" }
        },
    }
}
