//! Output formatting for the CLI.

use crate::error::Result;
use docket_domain::{ActionItem, BatchResult, Board, User};
use docket_pipeline::{PipelineOutcome, PipelineResult};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a pipeline run.
    pub fn format_pipeline(&self, result: &PipelineResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&result.to_json())?);
        }

        let mut sections = Vec::new();
        if !result.meeting_summary.is_empty() {
            sections.push(self.info(&result.meeting_summary));
        }

        match &result.outcome {
            PipelineOutcome::NoActionItems => {
                sections.push(self.warning(docket_pipeline::NO_ACTION_ITEMS_MESSAGE));
            }
            PipelineOutcome::Extracted => {
                sections.push(self.action_items_table(&result.action_items));
                sections.push(self.info(&format!(
                    "{} action item(s) extracted; rerun with --create to create tasks",
                    result.action_items.len()
                )));
            }
            PipelineOutcome::Created(batch) => {
                sections.push(self.action_items_table(&result.action_items));
                sections.push(self.batch_summary(batch));
            }
        }

        Ok(sections.join("\n\n"))
    }

    /// Format boards with their groups and columns.
    pub fn format_boards(&self, boards: &[Board]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(boards)?);
        }
        if boards.is_empty() {
            return Ok(self.colorize("No boards found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Groups", "Columns"]);

        for board in boards {
            let groups = board
                .groups
                .iter()
                .map(|g| format!("{} ({})", g.title, g.id))
                .collect::<Vec<_>>()
                .join("\n");
            let columns = board
                .columns
                .iter()
                .map(|c| format!("{} [{}]", c.title, c.column_type))
                .collect::<Vec<_>>()
                .join("\n");
            builder.push_record([board.id.as_str(), board.name.as_str(), groups.as_str(), columns.as_str()]);
        }

        Ok(self.render(builder))
    }

    /// Format users.
    pub fn format_users(&self, users: &[User]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(users)?);
        }
        if users.is_empty() {
            return Ok(self.colorize("No users found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Email"]);
        for user in users {
            builder.push_record([
                user.id.as_str(),
                user.name.as_str(),
                user.email.as_deref().unwrap_or("-"),
            ]);
        }

        Ok(self.render(builder))
    }

    fn action_items_table(&self, items: &[ActionItem]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Task", "Assignee", "Deadline", "Priority", "Project"]);

        for (idx, item) in items.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                item.task_title.clone(),
                item.assignee.clone().unwrap_or_else(|| "-".to_string()),
                item.deadline.clone().unwrap_or_else(|| "-".to_string()),
                item.priority.label().to_string(),
                item.project_context.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        self.render(builder)
    }

    fn batch_summary(&self, batch: &BatchResult) -> String {
        let mut lines = vec![self.success(&format!(
            "Created {} task(s) on {} / {}",
            batch.created, batch.board.name, batch.group.title
        ))];
        for failure in &batch.errors {
            lines.push(self.error(&format!(
                "{}: {}",
                failure.action_item.task_title, failure.error
            )));
        }
        lines.join("\n")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
