//! Per-item outcomes of task creation

use crate::action_item::ActionItem;
use crate::board::{Board, Group};
use serde::{Deserialize, Serialize};

/// An item as created on the task service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    /// Remote item id
    pub id: String,

    /// Remote item name
    pub name: String,
}

/// A successfully created task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTask {
    /// Remote item id
    pub id: String,

    /// Remote item name
    pub name: String,

    /// The action item it was created from
    pub action_item: ActionItem,
}

/// A task that could not be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationFailure {
    /// Why creation failed
    pub error: String,

    /// The action item that failed
    pub action_item: ActionItem,
}

/// Board identity reported back with a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRef {
    /// Board id
    pub id: String,

    /// Board name
    pub name: String,
}

impl From<&Board> for BoardRef {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            name: board.name.clone(),
        }
    }
}

/// Group identity reported back with a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    /// Group id
    pub id: String,

    /// Group title
    pub title: String,
}

impl From<&Group> for GroupRef {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            title: group.title.clone(),
        }
    }
}

/// Aggregate result of one task-creation batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of created tasks
    pub created: usize,

    /// Number of failed items
    pub failed: usize,

    /// Created tasks, in input order
    pub results: Vec<CreatedTask>,

    /// Failures, in input order
    pub errors: Vec<CreationFailure>,

    /// Board the batch targeted
    pub board: BoardRef,

    /// Group the batch targeted
    pub group: GroupRef,
}

impl BatchResult {
    /// Assemble a batch result; counts are derived from the lists
    pub fn new(
        results: Vec<CreatedTask>,
        errors: Vec<CreationFailure>,
        board: BoardRef,
        group: GroupRef,
    ) -> Self {
        Self {
            created: results.len(),
            failed: errors.len(),
            results,
            errors,
            board,
            group,
        }
    }
}
