//! In-memory task tracker for deterministic testing.

use crate::error::TrackerError;
use docket_domain::traits::{ColumnValues, TaskTracker};
use docket_domain::{Board, RemoteItem, User};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// An item recorded by [`MockTracker::create_item`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedItem {
    /// Remote id handed back to the caller
    pub id: String,
    /// Board the item was created on
    pub board_id: String,
    /// Group the item was created in
    pub group_id: String,
    /// Item name
    pub name: String,
    /// Column values sent with the item
    pub column_values: ColumnValues,
}

#[derive(Debug, Default)]
struct MockState {
    calls: usize,
    items: Vec<RecordedItem>,
    updates: Vec<(String, String)>,
}

/// Mock task tracker
///
/// Serves configured boards and users, records created items and updates,
/// and counts every call. Clones share state.
///
/// # Examples
///
/// ```
/// use docket_tracker::MockTracker;
///
/// let tracker = MockTracker::new().reject_item("Bad <title>");
/// assert_eq!(tracker.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTracker {
    boards: Vec<Board>,
    users: Vec<User>,
    rejected_names: HashSet<String>,
    fail_updates: bool,
    unreachable: bool,
    state: Arc<Mutex<MockState>>,
}

impl MockTracker {
    /// Create an empty mock tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails with a transport error
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Serve a board from `list_boards`
    pub fn with_board(mut self, board: Board) -> Self {
        self.boards.push(board);
        self
    }

    /// Serve users from `list_users`
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Make `create_item` fail for items with this exact name
    pub fn reject_item(mut self, name: impl Into<String>) -> Self {
        self.rejected_names.insert(name.into());
        self
    }

    /// Make every `create_update` call fail
    pub fn fail_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Total number of calls of any kind
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    /// Items created so far
    pub fn created_items(&self) -> Vec<RecordedItem> {
        self.state.lock().unwrap().items.clone()
    }

    /// Updates attached so far as `(item_id, body)`
    pub fn updates(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().updates.clone()
    }

    fn begin_call(&self) -> Result<(), TrackerError> {
        self.state.lock().unwrap().calls += 1;
        if self.unreachable {
            return Err(TrackerError::Transport("Mock tracker unreachable".to_string()));
        }
        Ok(())
    }
}

impl TaskTracker for MockTracker {
    type Error = TrackerError;

    async fn list_boards(&self) -> Result<Vec<Board>, Self::Error> {
        self.begin_call()?;
        Ok(self.boards.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, Self::Error> {
        self.begin_call()?;
        Ok(self.users.clone())
    }

    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: &ColumnValues,
    ) -> Result<RemoteItem, Self::Error> {
        self.begin_call()?;
        if self.rejected_names.contains(item_name) {
            return Err(TrackerError::Api(format!(
                r#"[{{"message":"Invalid item name: {}"}}]"#,
                item_name
            )));
        }

        let mut state = self.state.lock().unwrap();
        let id = format!("item-{}", state.items.len() + 1);
        state.items.push(RecordedItem {
            id: id.clone(),
            board_id: board_id.to_string(),
            group_id: group_id.to_string(),
            name: item_name.to_string(),
            column_values: column_values.clone(),
        });

        Ok(RemoteItem {
            id,
            name: item_name.to_string(),
        })
    }

    async fn create_update(&self, item_id: &str, body: &str) -> Result<(), Self::Error> {
        self.begin_call()?;
        if self.fail_updates {
            return Err(TrackerError::Api(
                r#"[{"message":"Update rejected"}]"#.to_string(),
            ));
        }
        self.state
            .lock()
            .unwrap()
            .updates
            .push((item_id.to_string(), body.to_string()));
        Ok(())
    }
}
