//! Docket Pipeline
//!
//! Ties the extraction and task-creation stages together behind one object
//! used by both the HTTP server and the command line.
//!
//! # Architecture
//!
//! ```text
//! Notes → Extractor → action items ─┬─ auto_create = false → returned for review
//!                                   └─ auto_create = true  → TaskCreator → BatchResult
//! ```

#![warn(missing_docs)]

pub mod config;
mod error;
mod pipeline;

pub use config::{ConfigError, DocketConfig, LlmConfig, TrackerConfig};
pub use error::PipelineError;
pub use pipeline::{
    LivePipeline, MeetingRequest, Pipeline, PipelineOutcome, PipelineResult,
    NO_ACTION_ITEMS_MESSAGE,
};
