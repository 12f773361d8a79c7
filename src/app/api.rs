//! Client-side access to the SpaceX REST API (v3).
//!
//! Only the fields the views display are modelled; everything else in the
//! payloads is ignored.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
    /// Non-2xx answer for the history list; the message is shown verbatim
    #[error("Fetching Events")]
    EventsUnavailable { status: u16 },
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("the data API is only reachable from the browser")]
    Unsupported,
}

/// Map a non-2xx status to an error
pub fn check_status(url: &str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}

// =============================================================================
// Launch Types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LaunchSite {
    #[serde(default)]
    pub site_name_long: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Launch {
    pub flight_number: u32,
    pub mission_name: String,
    #[serde(default)]
    pub launch_site: LaunchSite,
    #[serde(default)]
    pub launch_date_utc: Option<DateTime<Utc>>,
}

/// Which launch to show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchQuery {
    Next,
    Flight(u32),
}

// =============================================================================
// History Types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EventLinks {
    pub article: Option<String>,
    pub wikipedia: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryEvent {
    pub id: u32,
    pub title: String,
    pub flight_number: Option<u32>,
    pub details: Option<String>,
    #[serde(default)]
    pub links: EventLinks,
    #[serde(default)]
    pub event_date_utc: Option<DateTime<Utc>>,
}

/// Event selected by a path parameter. Ids are numeric; anything else selects nothing.
pub fn find_event<'a>(
    events: &'a [HistoryEvent],
    event_id: Option<&str>,
) -> Option<&'a HistoryEvent> {
    let id: u32 = event_id?.trim().parse().ok()?;
    events.iter().find(|event| event.id == id)
}

// =============================================================================
// Client
// =============================================================================

/// How request URLs become JSON documents
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError>;
}

/// `window.fetch` in the browser
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetch;

#[async_trait(?Send)]
impl Transport for BrowserFetch {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        fetch_json(url).await
    }
}

/// Client for the data API, shared via context
#[derive(Clone)]
pub struct SpaceXApi {
    base_url: String,
    transport: Rc<dyn Transport>,
}

impl fmt::Debug for SpaceXApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceXApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SpaceXApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Rc::new(BrowserFetch))
    }

    pub fn with_transport(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        // Url::join replaces the last segment unless the base ends in '/'
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self {
            base_url,
            transport,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| ApiError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let value = self.transport.get_json(url.as_str()).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn launch_url(&self, query: LaunchQuery) -> Result<Url, ApiError> {
        match query {
            LaunchQuery::Next => self.endpoint("launches/next"),
            LaunchQuery::Flight(flight) => self.endpoint(&format!("launches/{}", flight)),
        }
    }

    pub fn history_url(&self) -> Result<Url, ApiError> {
        self.endpoint("history")
    }

    pub async fn launch(&self, query: LaunchQuery) -> Result<Launch, ApiError> {
        let url = self.launch_url(query)?;
        self.get(url).await
    }

    /// Historical events. Any non-2xx answer becomes [`ApiError::EventsUnavailable`].
    pub async fn history(&self) -> Result<Vec<HistoryEvent>, ApiError> {
        let url = self.history_url()?;
        self.get(url).await.map_err(history_error)
    }
}

fn history_error(e: ApiError) -> ApiError {
    match e {
        ApiError::Status { status, .. } => ApiError::EventsUnavailable { status },
        other => other,
    }
}

// =============================================================================
// Fetch Helpers
// =============================================================================

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or(ApiError::Unsupported)?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Response".into()))?;

    check_status(url, resp.status())?;

    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Native stub - there is no fetch outside the browser
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unsupported)
}
