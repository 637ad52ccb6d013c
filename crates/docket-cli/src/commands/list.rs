//! Board and user listing commands.

use crate::error::Result;
use crate::output::Formatter;
use docket_domain::traits::{LlmProvider, TaskTracker};
use docket_pipeline::Pipeline;

/// Execute the boards command.
pub async fn execute_boards<L, T>(pipeline: &Pipeline<L, T>, formatter: &Formatter) -> Result<String>
where
    L: LlmProvider,
    T: TaskTracker,
{
    let boards = pipeline.list_boards().await?;
    formatter.format_boards(&boards)
}

/// Execute the users command.
pub async fn execute_users<L, T>(pipeline: &Pipeline<L, T>, formatter: &Formatter) -> Result<String>
where
    L: LlmProvider,
    T: TaskTracker,
{
    let users = pipeline.list_users().await?;
    formatter.format_users(&users)
}
