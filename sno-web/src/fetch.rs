//! `window.fetch` wrapper that reports to a request tracker.
//!
//! The tracker guard is taken before the first `.await` and lives until the
//! function returns, so the idle notification follows failed and cancelled
//! requests as well as successful ones.

use crate::error::WebError;
use serde::{Deserialize, Serialize};
use sno_activity::RequestTracker;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Per-request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// Count this request towards the loading marker
    pub track: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { track: true }
    }
}

impl FetchOptions {
    /// A background request that never shows the loading marker.
    pub fn untracked() -> Self {
        Self { track: false }
    }
}

/// HTTP client for the page, sharing one tracker across all requests.
///
/// Cheap to clone; suitable for `use_context_provider`.
#[derive(Clone, Default)]
pub struct TrackedFetch {
    tracker: RequestTracker,
}

impl TrackedFetch {
    pub fn new(tracker: RequestTracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// GET `url` and return the body as text.
    pub async fn get_text(&self, url: &str, options: FetchOptions) -> Result<String, WebError> {
        let _guard = options.track.then(|| self.tracker.begin());

        let window = web_sys::window().ok_or(WebError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(url, &init).map_err(WebError::from_js)?;
        request
            .headers()
            .set("Accept", "application/json, text/plain, */*")
            .map_err(WebError::from_js)?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(WebError::from_js)?;
        let response: Response = value.dyn_into().map_err(WebError::from_js)?;

        if !response.ok() {
            return Err(WebError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(response.text().map_err(WebError::from_js)?)
            .await
            .map_err(WebError::from_js)?;
        text.as_string().ok_or(WebError::NotText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_tracked_by_default() {
        assert!(FetchOptions::default().track);
        assert!(!FetchOptions::untracked().track);
    }

    #[test]
    fn test_options_from_json() {
        let options: FetchOptions = serde_json::from_str(r#"{"track":false}"#).unwrap();
        assert_eq!(options, FetchOptions::untracked());
    }

    #[test]
    fn test_clones_share_tracker() {
        let fetch = TrackedFetch::default();
        let other = fetch.clone();
        let _guard = fetch.tracker().begin();
        assert_eq!(other.tracker().outstanding(), 1);
    }
}
