//! Browser binding for the loading toggle.
//!
//! This crate provides:
//! - `class_target`: `MarkerTarget` over a DOM element's `classList` (the body by default)
//! - `fetch`: `window.fetch` wrapper that reports to a `RequestTracker`
//! - `state`: Dioxus signal binding for the busy/idle flag
//! - `install`: one-call setup of the body-class toggle
//! - `components`: the `LoadingModal` element the styling layer reveals

pub mod class_target;
pub mod components;
pub mod error;
pub mod fetch;
pub mod install;
pub mod state;

pub use error::WebError;
