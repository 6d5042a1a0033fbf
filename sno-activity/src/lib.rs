//! Request activity tracking and the loading-marker toggle it drives.
//!
//! A [`RequestTracker`] counts outstanding requests and tells its observers
//! when the count leaves zero ("active") and when it returns to zero
//! ("idle"). A [`LoadingToggle`] is one such observer: it mirrors that signal
//! as a marker (by default the `loading` class) on a [`MarkerTarget`], which
//! in the browser is the document body.
//!
//! # Architecture
//!
//! - `Rc` + `Cell`/`RefCell` for interior mutability in single-threaded WASM,
//!   the same way `Database` handles are shared across Dioxus components
//! - Observers are plain trait objects; notifications raised from inside a
//!   handler are queued, so every observer sees the same ordered sequence
//! - The toggle keeps no counter of its own
//!
//! # Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use sno_activity::{ActivitySource, ClassList, LoadingToggle, RequestTracker};
//!
//! let tracker = RequestTracker::new();
//! let body = ClassList::new();
//! let toggle = Rc::new(LoadingToggle::new(body.clone(), "loading"));
//! tracker.subscribe(toggle.clone());
//!
//! let first = tracker.begin();
//! let second = tracker.begin();
//! assert!(body.contains("loading"));
//!
//! drop(first);
//! assert!(body.contains("loading"));
//! drop(second);
//! assert!(!body.contains("loading"));
//! ```

pub mod config;
pub mod error;
pub mod marker;
pub mod observer;
pub mod toggle;
pub mod tracker;

pub use config::{MarkerRoot, ToggleConfig, DEFAULT_MARKER_CLASS};
pub use error::{ActivityError, Result};
pub use marker::{ClassList, MarkerTarget};
pub use observer::{
    observer_fn, ActivitySource, FnObserver, RequestActivityObserver, SubscriptionId,
};
pub use toggle::{LoadingState, LoadingToggle, Notification};
pub use tracker::{RequestGuard, RequestTracker};
