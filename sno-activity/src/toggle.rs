//! The loading-indicator toggle.
//!
//! Two states, two notifications, no counter:
//!
//! | state   | active  | idle |
//! |---------|---------|------|
//! | Idle    | Loading | Idle |
//! | Loading | Loading | Idle |

use crate::config::ToggleConfig;
use crate::error::ActivityError;
use crate::marker::MarkerTarget;
use crate::observer::{ActivitySource, RequestActivityObserver, SubscriptionId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Whether the loading marker is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
}

impl LoadingState {
    pub fn is_loading(self) -> bool {
        self == LoadingState::Loading
    }

    /// State after a notification is delivered.
    pub fn after(self, notification: Notification) -> Self {
        match notification {
            Notification::Active => LoadingState::Loading,
            Notification::Idle => LoadingState::Idle,
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Idle => write!(f, "idle"),
            LoadingState::Loading => write!(f, "loading"),
        }
    }
}

/// One of the two tracker notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    Active,
    Idle,
}

impl FromStr for Notification {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "start" | "ajaxstart" => Ok(Notification::Active),
            "idle" | "stop" | "ajaxstop" => Ok(Notification::Idle),
            _ => Err(ActivityError::UnknownNotification(s.to_string())),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Active => write!(f, "active"),
            Notification::Idle => write!(f, "idle"),
        }
    }
}

/// Mirrors a tracker's busy/idle signal as a marker on a target.
pub struct LoadingToggle<T: MarkerTarget> {
    target: T,
    marker_class: String,
    state: Cell<LoadingState>,
}

impl<T: MarkerTarget> LoadingToggle<T> {
    /// Create an idle toggle. The marker is not touched until the first
    /// notification arrives.
    pub fn new(target: T, marker_class: impl Into<String>) -> Self {
        Self {
            target,
            marker_class: marker_class.into(),
            state: Cell::new(LoadingState::Idle),
        }
    }

    pub fn from_config(target: T, config: &ToggleConfig) -> Self {
        Self::new(target, config.marker_class.clone())
    }

    /// Handle "requests became active": add the marker.
    pub fn on_requests_active(&self) {
        self.target.add_marker(&self.marker_class);
        if self.state.replace(LoadingState::Loading) == LoadingState::Idle {
            debug!("marker {:?} added", self.marker_class);
        }
    }

    /// Handle "requests became idle": remove the marker.
    pub fn on_requests_idle(&self) {
        self.target.remove_marker(&self.marker_class);
        if self.state.replace(LoadingState::Idle) == LoadingState::Loading {
            debug!("marker {:?} removed", self.marker_class);
        }
    }

    pub fn apply(&self, notification: Notification) -> LoadingState {
        match notification {
            Notification::Active => self.on_requests_active(),
            Notification::Idle => self.on_requests_idle(),
        }
        self.state()
    }

    pub fn state(&self) -> LoadingState {
        self.state.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: MarkerTarget + 'static> LoadingToggle<T> {
    /// Subscribe to `source`. If requests are already in flight the marker
    /// is applied now rather than at the next notification.
    pub fn attach<S: ActivitySource + ?Sized>(self, source: &S) -> (Rc<Self>, SubscriptionId) {
        let toggle = Rc::new(self);
        if source.is_busy() {
            toggle.on_requests_active();
        }
        let subscription = source.subscribe(toggle.clone());
        (toggle, subscription)
    }

    /// Unsubscribe from `source` and clear the marker.
    pub fn detach<S: ActivitySource + ?Sized>(&self, source: &S, subscription: SubscriptionId) {
        source.unsubscribe(subscription);
        self.on_requests_idle();
    }
}

impl<T: MarkerTarget> RequestActivityObserver for LoadingToggle<T> {
    fn on_requests_active(&self) {
        LoadingToggle::on_requests_active(self)
    }

    fn on_requests_idle(&self) {
        LoadingToggle::on_requests_idle(self)
    }
}
