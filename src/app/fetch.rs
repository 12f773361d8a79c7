//! Per-view request lifecycle.
//!
//! Each mounted view starts its fetch once. The result is only applied while
//! the view is still mounted; a response that lands after unmount is dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

use super::api::ApiError;

/// State of a single data request
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Tracks whether the owning view is still mounted
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Apply `value` only if still mounted. Returns whether it was applied.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_mounted() {
            apply(value);
            true
        } else {
            false
        }
    }
}

/// Run `fetch` once for this component instance and expose its state.
pub fn use_fetch<T, F, Fut>(label: &'static str, fetch: F) -> Signal<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut state = use_signal(|| FetchState::Loading);
    let guard = use_hook(MountGuard::new);

    let on_drop = guard.clone();
    use_drop(move || on_drop.unmount());

    use_hook(move || {
        tracing::debug!(label, "fetch started");
        spawn(async move {
            let result = fetch().await;
            if let Err(e) = &result {
                tracing::warn!(label, "fetch failed: {}", e);
            }
            let applied = guard.apply(FetchState::from_result(result), |next| state.set(next));
            if !applied {
                tracing::debug!(label, "discarding result for unmounted view");
            }
        });
    });

    state
}
