//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docket_domain::traits::{LlmProvider, TaskTracker};
use docket_domain::MeetingNotes;
use docket_pipeline::{MeetingRequest, Pipeline};
use std::io::Read;
use std::path::Path;

/// Execute the extract command.
pub async fn execute_extract<L, T>(
    args: ExtractArgs,
    pipeline: &Pipeline<L, T>,
    formatter: &Formatter,
) -> Result<String>
where
    L: LlmProvider,
    T: TaskTracker,
{
    let notes = read_notes(&args.file)?;

    let request = MeetingRequest {
        notes: MeetingNotes::new(notes, args.title),
        board_id: args.board,
        group_id: args.group,
        auto_create: args.create,
    };

    let result = pipeline.process_meeting(&request).await?;
    formatter.format_pipeline(&result)
}

/// Read notes from a file, or stdin for `-`.
fn read_notes(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut notes = String::new();
        std::io::stdin().read_to_string(&mut notes)?;
        return Ok(notes);
    }

    std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read notes file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use docket_domain::{Board, Group};
    use docket_llm::MockProvider;
    use docket_pipeline::DocketConfig;
    use docket_tracker::MockTracker;
    use std::io::Write;
    use std::path::PathBuf;

    const NOTES: &str = "Planning meeting. Sam will send the invoice by 2025-01-20 and Priya books the venue.";
    const RESPONSE: &str =
        r#"{"meeting_summary": "Planning.", "action_items": [{"task_title": "Send invoice"}]}"#;

    fn notes_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", NOTES).unwrap();
        file
    }

    fn args(file: PathBuf, create: bool) -> ExtractArgs {
        ExtractArgs {
            file,
            title: Some("Planning".to_string()),
            create,
            board: Some("B".to_string()),
            group: None,
        }
    }

    fn tracker() -> MockTracker {
        MockTracker::new().with_board(Board {
            id: "B".to_string(),
            name: "Events".to_string(),
            groups: vec![Group {
                id: "g1".to_string(),
                title: "Upcoming".to_string(),
            }],
            columns: vec![],
        })
    }

    #[tokio::test]
    async fn test_extract_without_create() {
        let file = notes_file();
        let tracker = tracker();
        let pipeline = Pipeline::new(
            MockProvider::new(RESPONSE),
            tracker.clone(),
            &DocketConfig::default_test_config(),
        );
        let formatter = Formatter::new(OutputFormat::Table, false);

        let output = execute_extract(args(file.path().to_path_buf(), false), &pipeline, &formatter)
            .await
            .unwrap();

        assert!(output.contains("Send invoice"));
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extract_with_create() {
        let file = notes_file();
        let tracker = tracker();
        let pipeline = Pipeline::new(
            MockProvider::new(RESPONSE),
            tracker.clone(),
            &DocketConfig::default_test_config(),
        );
        let formatter = Formatter::new(OutputFormat::Json, false);

        let output = execute_extract(args(file.path().to_path_buf(), true), &pipeline, &formatter)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["created"], 1);
        assert_eq!(tracker.created_items().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let pipeline = Pipeline::new(
            MockProvider::new(RESPONSE),
            tracker(),
            &DocketConfig::default_test_config(),
        );
        let formatter = Formatter::new(OutputFormat::Table, false);

        let err = execute_extract(
            args(PathBuf::from("/nonexistent/notes.txt"), false),
            &pipeline,
            &formatter,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
