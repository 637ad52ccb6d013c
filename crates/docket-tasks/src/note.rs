//! Update body attached to each created task

use docket_domain::{title_or_default, ActionItem};

/// Format the note attached to a created task
///
/// Always carries the meeting title and priority; description, assignee,
/// deadline and project context appear only when present.
pub fn format_note(item: &ActionItem, meeting_title: Option<&str>) -> String {
    let mut lines = vec![format!("Created from meeting: {}", title_or_default(meeting_title))];

    if let Some(description) = present(&item.description) {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    lines.push(String::new());
    lines.push(format!("Priority: {}", item.priority.label()));

    if let Some(assignee) = present(&item.assignee) {
        lines.push(format!("Assignee: {}", assignee));
    }
    if let Some(deadline) = present(&item.deadline) {
        lines.push(format!("Deadline: {}", deadline));
    }
    if let Some(context) = present(&item.project_context) {
        lines.push(format!("Project: {}", context));
    }

    lines.join("\n")
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
