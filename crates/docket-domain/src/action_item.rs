//! Action items - the unit of work extracted from meeting notes

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Priority of an action item
///
/// Anything the model emits that is not recognisably `high` or `low`
/// (including a missing or null value) reads as [`Priority::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Urgent or blocking work
    High,

    /// Normal work
    #[default]
    Medium,

    /// Nice-to-have work
    Low,
}

impl Priority {
    /// Get the priority name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalised label used in human-facing text
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a priority leniently, falling back to `Medium`
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::Priority;
    ///
    /// assert_eq!(Priority::parse("HIGH"), Priority::High);
    /// assert_eq!(Priority::parse(" low "), Priority::Low);
    /// assert_eq!(Priority::parse("urgent-ish"), Priority::Medium);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) => Priority::parse(&s),
            _ => Priority::Medium,
        })
    }
}

/// Read an optional text field the way a model might actually write it
///
/// Strings pass through, numbers are rendered, arrays are joined with
/// `", "`. Null, booleans, objects and empty arrays read as `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(text_from_value))
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

/// A task extracted from meeting notes
///
/// Produced by the extraction stage and consumed by task creation; never
/// persisted. Field names match the JSON the model is asked to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Short imperative title (required)
    pub task_title: String,

    /// Up to a few sentences of detail
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,

    /// Person responsible, if named
    #[serde(default, deserialize_with = "lenient_text")]
    pub assignee: Option<String>,

    /// ISO date or relative phrase, deliberately unvalidated here
    #[serde(default, deserialize_with = "lenient_text")]
    pub deadline: Option<String>,

    /// Priority, `medium` when absent
    #[serde(default)]
    pub priority: Priority,

    /// Project or workstream the item belongs to
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_context: Option<String>,
}

impl ActionItem {
    /// Create an action item with only a title
    pub fn new(task_title: impl Into<String>) -> Self {
        Self {
            task_title: task_title.into(),
            description: None,
            assignee: None,
            deadline: None,
            priority: Priority::Medium,
            project_context: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the project context
    pub fn with_project_context(mut self, context: impl Into<String>) -> Self {
        self.project_context = Some(context.into());
        self
    }
}

/// Output of the extraction stage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Short summary of the meeting
    #[serde(default)]
    pub meeting_summary: String,

    /// Extracted items, in the order the model listed them
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

impl ExtractionResult {
    /// True when nothing actionable was found; creation is skipped
    pub fn is_empty(&self) -> bool {
        self.action_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_medium() {
        let item: ActionItem = serde_json::from_str(r#"{"task_title": "Ship it"}"#).unwrap();
        assert_eq!(item.priority, Priority::Medium);
        assert!(item.assignee.is_none());
    }

    #[test]
    fn test_priority_null_is_medium() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "priority": null}"#).unwrap();
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn test_priority_case_insensitive() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "priority": "High"}"#).unwrap();
        assert_eq!(item.priority, Priority::High);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let item = ActionItem::new("Ship it").with_priority(Priority::Low);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["priority"], "low");
    }

    #[test]
    fn test_nullable_assignee() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "assignee": null}"#).unwrap();
        assert!(item.assignee.is_none());
    }

    #[test]
    fn test_non_string_priority_is_medium() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "priority": 1}"#).unwrap();
        assert_eq!(item.priority, Priority::Medium);

        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "priority": ["high"]}"#).unwrap();
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn test_assignee_list_is_joined() {
        let item: ActionItem =
            serde_json::from_str(r#"{"task_title": "Ship it", "assignee": ["Sam", "Priya"]}"#)
                .unwrap();
        assert_eq!(item.assignee.as_deref(), Some("Sam, Priya"));
    }

    #[test]
    fn test_numeric_fields_become_text() {
        let item: ActionItem = serde_json::from_str(
            r#"{"task_title": "Ship it", "deadline": 20250120, "project_context": 42}"#,
        )
        .unwrap();
        assert_eq!(item.deadline.as_deref(), Some("20250120"));
        assert_eq!(item.project_context.as_deref(), Some("42"));
    }

    #[test]
    fn test_unusable_text_shapes_are_none() {
        let item: ActionItem = serde_json::from_str(
            r#"{"task_title": "Ship it", "description": {"text": "x"}, "assignee": [], "deadline": true}"#,
        )
        .unwrap();
        assert!(item.description.is_none());
        assert!(item.assignee.is_none());
        assert!(item.deadline.is_none());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_str::<ActionItem>(r#"{"description": "no title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_extraction_result_defaults() {
        let result: ExtractionResult = serde_json::from_str("{}").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.meeting_summary, "");
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::default().to_string(), "Medium");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics_and_only_known_words_escape_medium(s in ".*") {
                let p = Priority::parse(&s);
                let normalized = s.trim().to_lowercase();
                if normalized != "high" && normalized != "low" {
                    prop_assert_eq!(p, Priority::Medium);
                }
            }
        }
    }
}
