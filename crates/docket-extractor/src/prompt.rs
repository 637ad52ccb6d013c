//! LLM prompt engineering for action-item extraction

use chrono::NaiveDate;
use docket_domain::title_or_default;

/// Builds the single prompt sent to the model
pub struct PromptBuilder<'a> {
    notes: &'a str,
    title: Option<&'a str>,
    today: NaiveDate,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(notes: &'a str, title: Option<&'a str>, today: NaiveDate) -> Self {
        Self { notes, title, today }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt =
            String::with_capacity(EXTRACTION_INSTRUCTIONS.len() + self.notes.len() + 256);

        // 1. Instructions and output schema
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Meeting context
        prompt.push_str(&format!("Meeting Title: {}\n", title_or_default(self.title)));
        prompt.push_str(&format!("Today's Date: {}\n\n", self.today.format("%Y-%m-%d")));

        // 3. The notes
        prompt.push_str("Meeting Notes:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.notes);
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an assistant that turns meeting notes into a list of concrete action items.

Rules:
- Only extract work someone committed to or was asked to do; skip general discussion
- task_title: a short imperative phrase (e.g. "Send revised budget to finance")
- description: at most 3 sentences of useful context, or null
- assignee: the person's name exactly as written in the notes, or null if nobody was named
- deadline: an ISO date (YYYY-MM-DD) when one can be determined from the notes and today's date,
  otherwise the phrase used in the notes (e.g. "end of quarter"), or null
- priority: "high", "medium" or "low"; use "medium" when the notes give no signal
- project_context: the project or workstream the item belongs to, or null
- meeting_summary: 1-2 sentences describing what the meeting covered

Example output:
{
  "meeting_summary": "Weekly sync on the Q3 launch; marketing assets are late.",
  "action_items": [
    {
      "task_title": "Finalize launch landing page copy",
      "description": "Copy must reflect the new pricing tiers agreed in the meeting.",
      "assignee": "Priya",
      "deadline": "2025-07-18",
      "priority": "high",
      "project_context": "Q3 launch"
    }
  ]
}"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Respond with a single JSON object with the keys "meeting_summary" and "action_items".
If there are no action items, return an empty "action_items" array.

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    #[test]
    fn test_prompt_includes_notes() {
        let prompt = PromptBuilder::new("Alice will send the deck", None, day()).build();
        assert!(prompt.contains("Alice will send the deck"));
    }

    #[test]
    fn test_prompt_default_title() {
        let prompt = PromptBuilder::new("notes", None, day()).build();
        assert!(prompt.contains("Meeting Title: Untitled Meeting"));

        let prompt = PromptBuilder::new("notes", Some(""), day()).build();
        assert!(prompt.contains("Meeting Title: Untitled Meeting"));
    }

    #[test]
    fn test_prompt_includes_title_and_date() {
        let prompt = PromptBuilder::new("notes", Some("Sprint review"), day()).build();
        assert!(prompt.contains("Meeting Title: Sprint review"));
        assert!(prompt.contains("Today's Date: 2025-01-13"));
    }

    #[test]
    fn test_prompt_includes_schema() {
        let prompt = PromptBuilder::new("notes", None, day()).build();
        for key in ["task_title", "assignee", "deadline", "priority", "project_context", "meeting_summary"] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
    }

    #[test]
    fn test_notes_come_after_instructions() {
        let prompt = PromptBuilder::new("UNIQUE_NOTES_MARKER", None, day()).build();
        let rules = prompt.find("Rules:").unwrap();
        let notes = prompt.find("UNIQUE_NOTES_MARKER").unwrap();
        assert!(rules < notes);
    }
}
