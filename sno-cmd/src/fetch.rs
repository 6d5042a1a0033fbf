//! Concurrent fetch with loading-marker reporting.

use crate::client::TrackedClient;
use futures::future::join_all;
use log::{info, warn};
use sno_activity::{
    observer_fn, ActivitySource, ClassList, LoadingToggle, RequestTracker, ToggleConfig,
};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Outcome of one fetched URL.
#[derive(Debug)]
pub struct FetchReport {
    pub url: String,
    pub tracked: bool,
    pub result: Result<usize, String>,
}

/// Fetch every URL concurrently on the current thread.
///
/// Tracked and untracked requests run together; only tracked ones move the
/// marker. Individual request failures are reported, not returned.
pub async fn fetch_all(
    client: &TrackedClient,
    urls: &[String],
    untracked: &[String],
) -> Vec<FetchReport> {
    // Collecting starts every tracked request up front, as a browser would
    // on send, so the batch produces one active/idle pair.
    let tracked_requests: Vec<_> = urls
        .iter()
        .map(|url| {
            let request = client.get_text(url);
            async move {
                FetchReport {
                    url: url.clone(),
                    tracked: true,
                    result: request
                        .await
                        .map(|body| body.len())
                        .map_err(|e| e.to_string()),
                }
            }
        })
        .collect();
    let untracked_requests: Vec<_> = untracked
        .iter()
        .map(|url| async move {
            FetchReport {
                url: url.clone(),
                tracked: false,
                result: client
                    .get_text_untracked(url)
                    .await
                    .map(|body| body.len())
                    .map_err(|e| e.to_string()),
            }
        })
        .collect();

    let (mut reports, background) =
        futures::join!(join_all(tracked_requests), join_all(untracked_requests));
    reports.extend(background);
    reports
}

/// Run the `fetch` command: print marker transitions and per-URL results.
pub async fn run_fetch(
    urls: &[String],
    untracked: &[String],
    config: &ToggleConfig,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let tracker = RequestTracker::new();
    let root = ClassList::new();
    let toggle = Rc::new(LoadingToggle::from_config(root.clone(), config));
    tracker.subscribe(toggle.clone());

    let started = Instant::now();
    let (on_active, on_idle) = (root.clone(), root.clone());
    tracker.subscribe(observer_fn(
        move || {
            let ms = elapsed_ms(started);
            println!("[{ms:>6} ms] requests active, root: [{on_active}]");
        },
        move || {
            let ms = elapsed_ms(started);
            println!("[{ms:>6} ms] requests idle,   root: [{on_idle}]");
        },
    ));

    let client = TrackedClient::new(tracker, Duration::from_secs(timeout_secs))?;
    info!(
        "Fetching {} tracked and {} untracked URLs",
        urls.len(),
        untracked.len()
    );

    let reports = fetch_all(&client, urls, untracked).await;

    for report in &reports {
        let kind = if report.tracked { "tracked" } else { "untracked" };
        match &report.result {
            Ok(bytes) => println!("{kind:<9} {} ({bytes} bytes)", report.url),
            Err(e) => {
                warn!("{} failed: {}", report.url, e);
                println!("{kind:<9} {} FAILED: {e}", report.url);
            }
        }
    }
    println!("final state: {} [{}]", toggle.state(), root);
    Ok(())
}

fn elapsed_ms(started: Instant) -> u128 {
    started.elapsed().as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_fetch_all_reports_every_url_and_drains() {
        let tracker = RequestTracker::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (events.clone(), events.clone());
        tracker.subscribe(observer_fn(
            move || a.borrow_mut().push("active"),
            move || b.borrow_mut().push("idle"),
        ));
        let client = TrackedClient::new(tracker.clone(), Duration::from_secs(5)).unwrap();

        let urls = vec!["not a url".to_string(), "also not a url".to_string()];
        let background = vec!["still not a url".to_string()];
        let reports = fetch_all(&client, &urls, &background).await;

        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.result.is_err()));
        assert_eq!(reports.iter().filter(|r| r.tracked).count(), 2);
        assert!(!tracker.is_busy());
        assert_eq!(*events.borrow(), vec!["active", "idle"]);
    }

    #[tokio::test]
    async fn test_only_untracked_never_notifies() {
        let tracker = RequestTracker::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        tracker.subscribe(observer_fn(move || *flag.borrow_mut() = true, || {}));
        let client = TrackedClient::new(tracker, Duration::from_secs(5)).unwrap();

        let reports = fetch_all(&client, &[], &["not a url".to_string()]).await;

        assert_eq!(reports.len(), 1);
        assert!(!*fired.borrow());
    }
}
