//! On-demand view loading with a per-session cache.
//!
//! The first request for a view starts its load and stores the shared future;
//! every later request, including ones made while the first is still pending,
//! awaits that same future. Failures are cached too, so a broken view is never
//! retried within a session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use thiserror::Error;

use super::dispatch::ViewName;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to load the {view} view: {reason}")]
    Failed { view: ViewName, reason: String },
}

/// A loaded view, ready to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewModule {
    pub name: ViewName,
    pub title: Option<&'static str>,
}

impl ViewModule {
    pub fn new(name: ViewName) -> Self {
        Self {
            name,
            title: name.title(),
        }
    }
}

/// Where view modules come from
#[async_trait(?Send)]
pub trait ViewSource {
    async fn fetch(&self, view: ViewName) -> Result<ViewModule, LoadError>;
}

/// Views compiled into the application bundle.
///
/// Resolves on first poll, so the placeholder shows for at most one render.
/// A source that fetches split wasm chunks plugs in through [`ViewSource`]
/// without touching the loader or the routes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledViews;

#[async_trait(?Send)]
impl ViewSource for BundledViews {
    async fn fetch(&self, view: ViewName) -> Result<ViewModule, LoadError> {
        Ok(ViewModule::new(view))
    }
}

type PendingView = Shared<LocalBoxFuture<'static, Result<ViewModule, LoadError>>>;

/// Memoizing loader, shared via context
#[derive(Clone)]
pub struct ViewLoader {
    source: Rc<dyn ViewSource>,
    cache: Rc<RefCell<HashMap<ViewName, PendingView>>>,
}

impl ViewLoader {
    pub fn new(source: impl ViewSource + 'static) -> Self {
        Self {
            source: Rc::new(source),
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Load a view, starting the load only on the first request
    pub fn load(&self, view: ViewName) -> PendingView {
        let mut cache = self.cache.borrow_mut();
        cache
            .entry(view)
            .or_insert_with(|| {
                tracing::debug!(%view, "loading view");
                let source = Rc::clone(&self.source);
                async move {
                    let result = source.fetch(view).await;
                    if let Err(e) = &result {
                        tracing::error!("{}", e);
                    }
                    result
                }
                .boxed_local()
                .shared()
            })
            .clone()
    }

    /// Result of a finished load, if any
    pub fn ready(&self, view: ViewName) -> Option<Result<ViewModule, LoadError>> {
        self.cache
            .borrow()
            .get(&view)
            .and_then(|pending| pending.peek().cloned())
    }
}

/// Initialize view loader provider - call once at app root
pub fn use_view_loader_provider() -> ViewLoader {
    use_context_provider(|| ViewLoader::new(BundledViews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct CountingSource {
        calls: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl ViewSource for CountingSource {
        async fn fetch(&self, view: ViewName) -> Result<ViewModule, LoadError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ViewModule::new(view))
        }
    }

    struct FailingSource {
        calls: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl ViewSource for FailingSource {
        async fn fetch(&self, view: ViewName) -> Result<ViewModule, LoadError> {
            self.calls.set(self.calls.get() + 1);
            Err(LoadError::Failed {
                view,
                reason: "chunk missing".into(),
            })
        }
    }

    #[test]
    fn nothing_is_ready_before_first_request() {
        let loader = ViewLoader::new(BundledViews);
        assert_eq!(loader.ready(ViewName::Home), None);
    }

    #[test]
    fn first_load_is_memoized() {
        let source = CountingSource::default();
        let calls = source.calls.clone();
        let loader = ViewLoader::new(source);

        let module = tokio_test::block_on(loader.load(ViewName::Events)).unwrap();
        assert_eq!(module.title, Some("SpaceX Historical Events"));

        assert_eq!(loader.ready(ViewName::Events), Some(Ok(module)));
        tokio_test::block_on(loader.load(ViewName::Events)).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn concurrent_first_requests_share_one_load() {
        let source = CountingSource::default();
        let calls = source.calls.clone();
        let loader = ViewLoader::new(source);

        let a = loader.load(ViewName::Home);
        let b = loader.load(ViewName::Home);
        let (a, b) = tokio_test::block_on(futures::future::join(a, b));

        assert_eq!(a, b);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn views_are_cached_independently() {
        let source = CountingSource::default();
        let calls = source.calls.clone();
        let loader = ViewLoader::new(source);

        tokio_test::block_on(loader.load(ViewName::Home)).unwrap();
        tokio_test::block_on(loader.load(ViewName::NotFound)).unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(loader.ready(ViewName::Events), None);
    }

    #[test]
    fn failed_load_is_not_retried() {
        let calls = Rc::new(Cell::new(0));
        let loader = ViewLoader::new(FailingSource {
            calls: calls.clone(),
        });

        let first = tokio_test::block_on(loader.load(ViewName::Home));
        let second = tokio_test::block_on(loader.load(ViewName::Home));

        assert!(first.is_err());
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            first.unwrap_err().to_string(),
            "failed to load the home view: chunk missing"
        );
    }
}
