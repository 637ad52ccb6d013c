//! Error types for the task-tracker client.

use docket_domain::ErrorKind;
use thiserror::Error;

/// Task-tracker operation errors
///
/// Transport and application failures are distinct variants but share the
/// `Remote` kind.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Connection, timeout or HTTP status failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API responded with an `errors` payload
    #[error("Task service API error: {0}")]
    Api(String),

    /// The API responded but the data was not in the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Machine-readable classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::Config(_) => ErrorKind::Internal,
            _ => ErrorKind::Remote,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            TrackerError::Transport(format!("Connection failed: {}", e))
        } else if e.is_timeout() {
            TrackerError::Transport("Request timeout".to_string())
        } else if e.is_decode() {
            TrackerError::InvalidResponse(e.to_string())
        } else {
            TrackerError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
