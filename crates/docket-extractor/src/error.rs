//! Error types for the Extractor

use docket_domain::ErrorKind;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Notes are shorter than the configured minimum (trimmed characters)
    #[error("Meeting notes must be at least {min} characters (got {actual})")]
    NotesTooShort {
        /// Trimmed character count received
        actual: usize,
        /// Configured minimum
        min: usize,
    },

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model output is not JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Model output is JSON but not the expected shape
    #[error("Invalid extraction format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Machine-readable classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractorError::NotesTooShort { .. } => ErrorKind::Validation,
            ExtractorError::Llm(_) => ErrorKind::Remote,
            ExtractorError::JsonParse(_) | ExtractorError::InvalidFormat(_) => ErrorKind::Parse,
            ExtractorError::Config(_) => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
