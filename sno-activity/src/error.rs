/// Error types for request activity configuration and parsing
use thiserror::Error;

/// Main error type for activity operations
#[derive(Error, Debug)]
pub enum ActivityError {
    /// Config JSON could not be parsed
    #[error("Failed to parse toggle config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Marker class is empty
    #[error("Marker class must not be empty")]
    EmptyMarkerClass,

    /// Marker class is not a single DOM token
    #[error("Marker class must be a single token without whitespace: {0:?}")]
    InvalidMarkerClass(String),

    /// Root element id is empty
    #[error("Root element id must not be empty")]
    EmptyRootId,

    /// Notification name not recognised
    #[error("Unknown notification: {0:?} (expected active, start, idle or stop)")]
    UnknownNotification(String),
}

/// Type alias for Results using ActivityError
pub type Result<T> = std::result::Result<T, ActivityError>;
