//! Error types for the pipeline

use docket_domain::ErrorKind;
use docket_extractor::ExtractorError;
use docket_tasks::TaskError;
use thiserror::Error;

/// Errors surfaced by [`crate::Pipeline`]
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Notes are shorter than the configured minimum
    #[error("Meeting notes must be at least {min} characters (got {actual})")]
    NotesTooShort {
        /// Trimmed character count received
        actual: usize,
        /// Configured minimum
        min: usize,
    },

    /// Extraction stage failed
    #[error(transparent)]
    Extraction(#[from] ExtractorError),

    /// Task-creation stage failed for the whole batch
    #[error(transparent)]
    Tasks(#[from] TaskError),

    /// Listing boards or users failed
    #[error("Task service error: {0}")]
    Tracker(String),

    /// Remote client could not be built
    #[error("Client setup failed: {0}")]
    Client(String),
}

impl PipelineError {
    /// Machine-readable classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::NotesTooShort { .. } => ErrorKind::Validation,
            PipelineError::Extraction(e) => e.kind(),
            PipelineError::Tasks(e) => e.kind(),
            PipelineError::Tracker(_) => ErrorKind::Remote,
            PipelineError::Client(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_passes_through_stages() {
        let err = PipelineError::from(ExtractorError::JsonParse("eof".into()));
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), "JSON parse error: eof");

        let err = PipelineError::from(TaskError::BoardNotFound("1".into()));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = PipelineError::NotesTooShort { actual: 3, min: 50 };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("50"));
    }
}
