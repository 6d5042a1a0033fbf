//! Dioxus binding for the busy/idle flag.
//!
//! `ActivityState` exposes the marker as a `Signal<bool>` so components can
//! render from it instead of reading the body class back out of the DOM.

use dioxus::prelude::*;
use sno_activity::{
    ActivitySource, LoadingToggle, MarkerTarget, RequestTracker, DEFAULT_MARKER_CLASS,
};

/// Reactive loading state shared through context.
#[derive(Clone, Copy)]
pub struct ActivityState {
    /// True while at least one tracked request is outstanding
    pub loading: Signal<bool>,
}

impl ActivityState {
    pub fn new(loading: bool) -> Self {
        Self {
            loading: Signal::new(loading),
        }
    }
}

/// Marker target that writes a signal instead of a class.
#[derive(Clone, Copy)]
pub struct SignalTarget {
    signal: Signal<bool>,
}

impl SignalTarget {
    pub fn new(signal: Signal<bool>) -> Self {
        Self { signal }
    }

    fn write(&self, value: bool) {
        let mut signal = self.signal;
        // Skip redundant writes so subscribers don't re-render.
        if *signal.peek() != value {
            signal.set(value);
        }
    }
}

impl MarkerTarget for SignalTarget {
    fn add_marker(&self, _marker: &str) {
        self.write(true);
    }

    fn remove_marker(&self, _marker: &str) {
        self.write(false);
    }

    fn has_marker(&self, _marker: &str) -> bool {
        *self.signal.peek()
    }
}

/// Subscribe a signal-backed toggle to `tracker` for the lifetime of the
/// calling component and provide the resulting `ActivityState` as context.
pub fn use_request_activity(tracker: RequestTracker) -> ActivityState {
    let state = use_context_provider(|| ActivityState::new(tracker.is_busy()));

    let subscription = use_hook({
        let tracker = tracker.clone();
        move || {
            let toggle = LoadingToggle::new(SignalTarget::new(state.loading), DEFAULT_MARKER_CLASS);
            let (_, subscription) = toggle.attach(&tracker);
            subscription
        }
    });

    use_drop(move || {
        tracker.unsubscribe(subscription);
    });

    state
}
