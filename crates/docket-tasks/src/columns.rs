//! Column role resolution by column type

use docket_domain::{Board, Column};

/// Columns on a board that can carry action-item metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    /// First `date` column, used for the deadline
    pub due_date: Option<Column>,

    /// First `status` or `color` column
    pub status: Option<Column>,

    /// First `people` column
    pub assignee: Option<Column>,
}

impl ColumnRoles {
    /// Scan a board's columns in order and pick the first match for each role
    pub fn resolve(board: &Board) -> Self {
        Self {
            due_date: board.first_column_of(&["date"]).cloned(),
            status: board.first_column_of(&["status", "color"]).cloned(),
            assignee: board.first_column_of(&["people"]).cloned(),
        }
    }
}
