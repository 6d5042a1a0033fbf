//! Native HTTP client that reports to a request tracker.

use sno_activity::RequestTracker;
use std::future::Future;
use std::time::Duration;

/// `reqwest` client whose requests count towards a `RequestTracker`.
///
/// The tracker is `!Send`, so futures from this client must be driven on
/// one thread (a current-thread runtime, or `join_all` within one task).
#[derive(Clone)]
pub struct TrackedClient {
    client: reqwest::Client,
    tracker: RequestTracker,
}

impl TrackedClient {
    pub fn new(tracker: RequestTracker, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, tracker })
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// GET `url` as text, counted towards the loading marker.
    ///
    /// The request counts as started when this is called, not when the
    /// future is first polled. It is finished (and idle possibly notified)
    /// on every exit path, including transport and status errors and
    /// dropping the future.
    pub fn get_text<'a>(
        &'a self,
        url: &'a str,
    ) -> impl Future<Output = anyhow::Result<String>> + 'a {
        self.tracker.track(self.send(url))
    }

    /// GET `url` as text without touching the tracker.
    pub async fn get_text_untracked(&self, url: &str) -> anyhow::Result<String> {
        self.send(url).await
    }

    async fn send(&self, url: &str) -> anyhow::Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sno_activity::{ActivitySource, ClassList, LoadingToggle};
    use std::rc::Rc;

    fn client() -> TrackedClient {
        TrackedClient::new(RequestTracker::new(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_failed_request_still_finishes() {
        let client = client();
        let body = ClassList::new();
        client
            .tracker()
            .subscribe(Rc::new(LoadingToggle::new(body.clone(), "loading")));

        let future = client.get_text("not a url");
        assert!(body.contains("loading"));

        assert!(future.await.is_err());
        assert!(!body.contains("loading"));
        assert_eq!(client.tracker().outstanding(), 0);
    }

    #[tokio::test]
    async fn test_untracked_request_never_marks() {
        let client = client();
        let body = ClassList::new();
        client
            .tracker()
            .subscribe(Rc::new(LoadingToggle::new(body.clone(), "loading")));

        let future = client.get_text_untracked("not a url");
        assert!(!client.tracker().is_busy());
        assert!(future.await.is_err());
        assert!(body.is_empty());
    }
}
