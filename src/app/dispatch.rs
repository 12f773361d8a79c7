//! Route-to-view dispatch.
//!
//! The [`Route`] enum owns URL parsing; this module collapses a parsed route
//! into the top-level view it selects plus its path parameters.

use std::collections::BTreeMap;
use std::fmt;

use super::Route;

/// Top-level screens selected by the router
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewName {
    Home,
    Events,
    NotFound,
}

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Home => "home",
            ViewName::Events => "events",
            ViewName::NotFound => "not-found",
        }
    }

    /// Static document title, for views that set one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            ViewName::Home => Some("Home Page"),
            ViewName::Events => Some("SpaceX Historical Events"),
            ViewName::NotFound => None,
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The view selected by the current URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewName,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    fn bare(view: ViewName) -> Self {
        Self {
            view,
            params: BTreeMap::new(),
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        self.params.get("event_id").map(String::as_str)
    }
}

impl From<&Route> for RouteMatch {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home {} => RouteMatch::bare(ViewName::Home),
            Route::Events {} => RouteMatch::bare(ViewName::Events),
            // "/events/" may parse as an empty dynamic segment
            Route::EventDetail { event_id } if event_id.is_empty() => {
                RouteMatch::bare(ViewName::Events)
            }
            Route::EventDetail { event_id } => {
                let mut matched = RouteMatch::bare(ViewName::Events);
                matched
                    .params
                    .insert("event_id".to_string(), event_id.clone());
                matched
            }
            Route::NotFound { .. } => RouteMatch::bare(ViewName::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> RouteMatch {
        let route: Route = path.parse().ok().unwrap_or_else(|| {
            panic!("catch-all route should accept {path}");
        });
        RouteMatch::from(&route)
    }

    #[test]
    fn root_selects_home() {
        assert_eq!(resolve("/"), RouteMatch::bare(ViewName::Home));
    }

    #[test]
    fn events_index_has_no_event_id() {
        let matched = resolve("/events");
        assert_eq!(matched.view, ViewName::Events);
        assert_eq!(matched.event_id(), None);
    }

    #[test]
    fn events_with_trailing_slash_selects_events() {
        let matched = resolve("/events/");
        assert_eq!(matched.view, ViewName::Events);
        assert_eq!(matched.event_id(), None);
    }

    #[test]
    fn event_id_is_exposed_as_param() {
        let matched = resolve("/events/42");
        assert_eq!(matched.view, ViewName::Events);
        assert_eq!(matched.event_id(), Some("42"));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(resolve("/unknown").view, ViewName::NotFound);
        assert_eq!(resolve("/launches/next").view, ViewName::NotFound);
    }

    #[test]
    fn titles_per_view() {
        assert_eq!(ViewName::Home.title(), Some("Home Page"));
        assert_eq!(ViewName::Events.title(), Some("SpaceX Historical Events"));
        assert_eq!(ViewName::NotFound.title(), None);
    }
}
