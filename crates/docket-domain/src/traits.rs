//! Trait definitions for external interactions
//!
//! These traits define the boundaries between pipeline logic and the two
//! remote services. Infrastructure implementations live in other crates.

use crate::board::{Board, User};
use crate::outcome::RemoteItem;
use std::fmt::Display;
use std::future::Future;

/// Column id to column value, as sent to the task service
pub type ColumnValues = serde_json::Map<String, serde_json::Value>;

/// Trait for language-model completion
///
/// Implemented by the infrastructure layer (docket-llm)
pub trait LlmProvider: Send + Sync {
    /// Error type for completion calls
    type Error: Display + Send + Sync + 'static;

    /// Send `prompt` as the sole user message and return the first text segment
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Trait for the remote task-tracking service
///
/// Implemented by the infrastructure layer (docket-tracker)
pub trait TaskTracker: Send + Sync {
    /// Error type for tracker calls
    type Error: Display + Send + Sync + 'static;

    /// List boards with their groups and columns
    fn list_boards(&self) -> impl Future<Output = Result<Vec<Board>, Self::Error>> + Send;

    /// List user accounts
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send;

    /// Create an item under a board group
    fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: &ColumnValues,
    ) -> impl Future<Output = Result<RemoteItem, Self::Error>> + Send;

    /// Attach a free-text update to an existing item
    fn create_update(
        &self,
        item_id: &str,
        body: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
