//! Sequential task creation with per-item error isolation

use crate::columns::ColumnRoles;
use crate::deadline::{format_date, parse_deadline};
use crate::error::TaskError;
use crate::note::format_note;
use docket_domain::traits::{ColumnValues, TaskTracker};
use docket_domain::{
    ActionItem, BatchResult, Board, BoardRef, CreatedTask, CreationFailure, Group, GroupRef,
};
use serde_json::json;
use tracing::{debug, info, warn};

/// Creates remote tasks for a batch of action items
pub struct TaskCreator<T>
where
    T: TaskTracker,
{
    tracker: T,
    default_board_id: Option<String>,
}

impl<T> TaskCreator<T>
where
    T: TaskTracker,
{
    /// Create a task creator with no default board
    pub fn new(tracker: T) -> Self {
        Self {
            tracker,
            default_board_id: None,
        }
    }

    /// Board used when a batch names none
    pub fn with_default_board(mut self, board_id: Option<String>) -> Self {
        self.default_board_id = board_id.filter(|id| !id.trim().is_empty());
        self
    }

    /// The underlying task service client
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Create one remote task per action item
    ///
    /// Fails only on batch-level problems (empty input, unknown board or
    /// group); individual item failures are collected in the result.
    pub async fn create_tasks(
        &self,
        items: &[ActionItem],
        board_id: Option<&str>,
        group_id: Option<&str>,
        meeting_title: Option<&str>,
    ) -> Result<BatchResult, TaskError> {
        if items.is_empty() {
            return Err(TaskError::NoActionItems);
        }

        let board_id = board_id
            .filter(|id| !id.trim().is_empty())
            .or(self.default_board_id.as_deref())
            .ok_or(TaskError::NoBoard)?;

        let boards = self
            .tracker
            .list_boards()
            .await
            .map_err(|e| TaskError::Tracker(e.to_string()))?;
        let board = boards
            .iter()
            .find(|b| b.id == board_id)
            .ok_or_else(|| TaskError::BoardNotFound(board_id.to_string()))?;

        let group = resolve_group(board, group_id)?;
        let roles = ColumnRoles::resolve(board);
        debug!(
            "Board '{}' columns: date={:?} status={:?} people={:?}",
            board.name,
            roles.due_date.as_ref().map(|c| &c.id),
            roles.status.as_ref().map(|c| &c.id),
            roles.assignee.as_ref().map(|c| &c.id),
        );

        info!(
            "Creating {} tasks on board '{}' group '{}'",
            items.len(),
            board.name,
            group.title
        );

        let mut results = Vec::new();
        let mut errors = Vec::new();

        for item in items {
            match self
                .create_one(board, group, &roles, item, meeting_title)
                .await
            {
                Ok(created) => results.push(created),
                Err(error) => {
                    warn!("Failed to create task '{}': {}", item.task_title, error);
                    errors.push(CreationFailure {
                        error,
                        action_item: item.clone(),
                    });
                }
            }
        }

        let batch = BatchResult::new(results, errors, BoardRef::from(board), GroupRef::from(group));
        info!("Created {} tasks, {} failed", batch.created, batch.failed);
        Ok(batch)
    }

    async fn create_one(
        &self,
        board: &Board,
        group: &Group,
        roles: &ColumnRoles,
        item: &ActionItem,
        meeting_title: Option<&str>,
    ) -> Result<CreatedTask, String> {
        let column_values = column_values_for(item, roles);

        let remote = self
            .tracker
            .create_item(&board.id, &group.id, &item.task_title, &column_values)
            .await
            .map_err(|e| e.to_string())?;

        let note = format_note(item, meeting_title);
        self.tracker
            .create_update(&remote.id, &note)
            .await
            .map_err(|e| {
                format!(
                    "Task {} was created but its note could not be attached: {}",
                    remote.id, e
                )
            })?;

        Ok(CreatedTask {
            id: remote.id,
            name: remote.name,
            action_item: item.clone(),
        })
    }
}

fn resolve_group<'a>(board: &'a Board, group_id: Option<&str>) -> Result<&'a Group, TaskError> {
    match group_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => board.group(id).ok_or_else(|| TaskError::GroupNotFound {
            board: board.id.clone(),
            group: id.to_string(),
        }),
        None => board
            .groups
            .first()
            .ok_or_else(|| TaskError::NoGroups(board.id.clone())),
    }
}

/// Column values for one item; only the date column is populated
pub fn column_values_for(item: &ActionItem, roles: &ColumnRoles) -> ColumnValues {
    let mut values = ColumnValues::new();

    if let (Some(column), Some(deadline)) = (&roles.due_date, item.deadline.as_deref()) {
        match parse_deadline(deadline) {
            Some(date) => {
                values.insert(column.id.clone(), json!({ "date": format_date(date) }));
            }
            None => debug!("Deadline '{}' is not a calendar date, leaving it off", deadline),
        }
    }

    values
}
