//! Reusable Dioxus RSX components for the loading indicator.

mod loading_modal;

pub use loading_modal::LoadingModal;
