/// Error types for the browser binding
use sno_activity::ActivityError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Main error type for DOM and fetch operations
#[derive(Error, Debug)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread)
    #[error("No global window available")]
    NoWindow,

    /// Window without a document
    #[error("Window has no document")]
    NoDocument,

    /// Document without a body yet
    #[error("Document has no body")]
    NoBody,

    /// Configured root element is missing
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// Toggle config failed validation
    #[error("Invalid toggle config: {0}")]
    Config(#[from] ActivityError),

    /// A JavaScript call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body could not be read as text
    #[error("Response body was not text")]
    NotText,
}

impl WebError {
    /// Convert a thrown JS value, keeping the `Error.message` when there is one.
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|error| String::from(error.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        WebError::Js(message)
    }
}
