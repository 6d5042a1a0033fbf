//! Loading indicator demo
//!
//! Shows the body `loading` class following tracked requests:
//!
//! 1. On mount: install the body-class toggle on the page's tracker.
//! 2. Each button issues requests through the shared `TrackedFetch`.
//! 3. While any tracked request is outstanding the body carries `loading`,
//!    which the inline stylesheet turns into a modal overlay.
//! 4. The status line renders from the `ActivityState` signal.

use dioxus::prelude::*;
use log::{error, info};
use sno_activity::ToggleConfig;
use sno_web::components::LoadingModal;
use sno_web::fetch::{FetchOptions, TrackedFetch};
use sno_web::install::install_loading_toggle;
use sno_web::state::{use_request_activity, ActivityState};
use std::rc::Rc;

/// Endpoint that answers after a delay, so the overlay is visible.
const SLOW_URL: &str = "https://httpbin.org/delay/1";
const SLOWER_URL: &str = "https://httpbin.org/delay/2";

/// Overlay styling: hidden by default, shown while the body has `loading`.
const LOADING_CSS: &str = r#"
.modal {
    display: none;
    position: fixed;
    z-index: 1000;
    top: 0; left: 0; height: 100%; width: 100%;
    background: rgba(255, 255, 255, 0.8);
    text-align: center;
    padding-top: 40vh;
    font-size: 20px;
    color: #666;
}
body.loading { overflow: hidden; }
body.loading .modal { display: block; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sno-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let fetch = use_context_provider(TrackedFetch::default);
    use_request_activity(fetch.tracker().clone());
    let mut last_result = use_signal(|| "No requests yet".to_string());

    // ─── Attach the body toggle once on mount ───
    let tracker = fetch.tracker().clone();
    let installed = use_hook({
        let tracker = tracker.clone();
        move || match install_loading_toggle(&tracker, &ToggleConfig::default()) {
            Ok(installed) => Rc::new(Some(installed)),
            Err(e) => {
                error!("Failed to install loading toggle: {e}");
                Rc::new(None)
            }
        }
    });
    use_drop(move || {
        if let Some(installed) = installed.as_ref() {
            installed.detach(&tracker);
        }
    });

    let fetch_one = {
        let fetch = fetch.clone();
        move |_| {
            let fetch = fetch.clone();
            spawn(async move {
                let outcome = fetch.get_text(SLOW_URL, FetchOptions::default()).await;
                last_result.set(describe(SLOW_URL, outcome.map(|body| body.len())));
            });
        }
    };

    let fetch_two = {
        let fetch = fetch.clone();
        move |_| {
            let fetch = fetch.clone();
            spawn(async move {
                let (a, b) = futures::join!(
                    fetch.get_text(SLOW_URL, FetchOptions::default()),
                    fetch.get_text(SLOWER_URL, FetchOptions::default()),
                );
                info!("concurrent requests finished");
                last_result.set(format!(
                    "{} | {}",
                    describe(SLOW_URL, a.map(|body| body.len())),
                    describe(SLOWER_URL, b.map(|body| body.len())),
                ));
            });
        }
    };

    let fetch_background = {
        let fetch = fetch.clone();
        move |_| {
            let fetch = fetch.clone();
            spawn(async move {
                let outcome = fetch.get_text(SLOW_URL, FetchOptions::untracked()).await;
                last_result.set(format!(
                    "(background) {}",
                    describe(SLOW_URL, outcome.map(|body| body.len()))
                ));
            });
        }
    };

    // ─── Render ───
    rsx! {
        style { "{LOADING_CSS}" }
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 8px; font-family: system-ui;",

            h1 { style: "font-size: 20px;", "Loading indicator" }

            ActivityStatus {}

            div {
                style: "margin: 12px 0; display: flex; gap: 12px;",
                button { onclick: fetch_one, "One request" }
                button { onclick: fetch_two, "Two concurrent requests" }
                button { onclick: fetch_background, "Background request" }
            }

            p {
                style: "font-size: 12px; color: #666;",
                "{last_result}"
            }
        }
        LoadingModal {}
    }
}

/// Busy/idle line rendered from the activity signal.
#[component]
fn ActivityStatus() -> Element {
    let state = use_context::<ActivityState>();
    let label = if (state.loading)() { "Requests in flight" } else { "Idle" };

    rsx! {
        p {
            style: "font-size: 14px; font-weight: bold;",
            "Status: {label}"
        }
    }
}

/// Summarise one request outcome for the status line.
fn describe(url: &str, outcome: Result<usize, sno_web::WebError>) -> String {
    match outcome {
        Ok(bytes) => format!("{url}: {bytes} bytes"),
        Err(e) => format!("{url}: {e}"),
    }
}
