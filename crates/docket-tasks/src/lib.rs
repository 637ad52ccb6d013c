//! Docket Tasks
//!
//! Turns extracted action items into tasks on the remote task service.
//!
//! Each item becomes one remote task under the resolved board group, with
//! its deadline written to the board's first date column when it parses to
//! a calendar date, followed by a note carrying the meeting context. Items
//! are processed one at a time and a failure on one never stops the rest.

#![warn(missing_docs)]

mod columns;
mod creator;
mod deadline;
mod error;
mod note;

pub use columns::ColumnRoles;
pub use creator::{column_values_for, TaskCreator};
pub use deadline::{format_date, parse_deadline};
pub use error::TaskError;
pub use note::format_note;
