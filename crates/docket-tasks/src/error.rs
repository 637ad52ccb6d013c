//! Error types for task creation

use docket_domain::ErrorKind;
use thiserror::Error;

/// Batch-fatal errors of task creation
///
/// Per-item failures never surface here; they are collected into the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Nothing to create
    #[error("At least one action item is required")]
    NoActionItems,

    /// Neither the request nor configuration names a board
    #[error("No board id given and no default board is configured")]
    NoBoard,

    /// The target board does not exist
    #[error("Board {0} not found")]
    BoardNotFound(String),

    /// The requested group does not exist on the board
    #[error("Group {group} not found on board {board}")]
    GroupNotFound {
        /// Board id
        board: String,
        /// Requested group id
        group: String,
    },

    /// The board has no groups to place tasks in
    #[error("Board {0} has no groups")]
    NoGroups(String),

    /// Board lookup against the task service failed
    #[error("Task service error: {0}")]
    Tracker(String),
}

impl TaskError {
    /// Machine-readable classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::NoActionItems | TaskError::NoBoard | TaskError::NoGroups(_) => {
                ErrorKind::Validation
            }
            TaskError::BoardNotFound(_) | TaskError::GroupNotFound { .. } => ErrorKind::NotFound,
            TaskError::Tracker(_) => ErrorKind::Remote,
        }
    }
}
