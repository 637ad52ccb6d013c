//! Docket Domain Layer
//!
//! Core model and trait seams shared by every Docket crate. Apart from serde
//! (for the JSON wire format every boundary speaks) this crate has no
//! infrastructure dependencies.
//!
//! ## Key Concepts
//!
//! - **Meeting notes**: free text, validated only for a minimum length
//! - **Action item**: a structured task extracted from the notes
//! - **Board / Group / Column**: the task service's hierarchy
//! - **Batch result**: per-item successes and failures of task creation
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - Remote services are reached through the [`traits::LlmProvider`] and
//!   [`traits::TaskTracker`] seams, implemented in `docket-llm` and
//!   `docket-tracker`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_item;
pub mod board;
pub mod error;
pub mod notes;
pub mod outcome;
pub mod traits;

// Re-exports for convenience
pub use action_item::{ActionItem, ExtractionResult, Priority};
pub use board::{Board, Column, Group, User};
pub use error::ErrorKind;
pub use notes::{
    title_or_default, trimmed_char_count, MeetingNotes, DEFAULT_MEETING_TITLE, MIN_NOTES_CHARS,
};
pub use outcome::{BatchResult, BoardRef, CreatedTask, CreationFailure, GroupRef, RemoteItem};
