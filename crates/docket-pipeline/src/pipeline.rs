//! Meeting-notes pipeline: extraction, optional human checkpoint, task creation

use crate::config::DocketConfig;
use crate::error::PipelineError;
use docket_domain::traits::{LlmProvider, TaskTracker};
use docket_domain::{ActionItem, BatchResult, Board, ExtractionResult, MeetingNotes, User};
use docket_extractor::Extractor;
use docket_llm::AnthropicProvider;
use docket_tasks::TaskCreator;
use docket_tracker::MondayClient;
use serde_json::{json, Value};
use tracing::info;

/// Message returned when extraction finds nothing
pub const NO_ACTION_ITEMS_MESSAGE: &str = "No action items found in meeting notes";

/// Pipeline wired to the live remote services
pub type LivePipeline = Pipeline<AnthropicProvider, MondayClient>;

/// Input to [`Pipeline::process_meeting`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    /// Notes and optional title
    pub notes: MeetingNotes,

    /// Target board; falls back to the configured default
    pub board_id: Option<String>,

    /// Target group; falls back to the board's first group
    pub group_id: Option<String>,

    /// Create tasks immediately instead of returning items for review
    pub auto_create: bool,
}

impl MeetingRequest {
    /// A review-mode request for the default board
    pub fn new(notes: MeetingNotes) -> Self {
        Self {
            notes,
            board_id: None,
            group_id: None,
            auto_create: false,
        }
    }
}

/// What happened after extraction
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Extraction found nothing; no creation attempted
    NoActionItems,

    /// Items returned for review, nothing created
    Extracted,

    /// Items were sent to task creation
    Created(BatchResult),
}

/// Result of [`Pipeline::process_meeting`]
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Meeting summary from the model
    pub meeting_summary: String,

    /// Extracted action items
    pub action_items: Vec<ActionItem>,

    /// What happened after extraction
    pub outcome: PipelineOutcome,
}

impl PipelineResult {
    /// JSON shape of the result, without the `success` flag
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "meeting_summary": self.meeting_summary,
            "action_items": self.action_items,
        });

        match &self.outcome {
            PipelineOutcome::NoActionItems => {
                body["message"] = json!(NO_ACTION_ITEMS_MESSAGE);
            }
            PipelineOutcome::Extracted => {
                body["auto_created"] = json!(false);
            }
            PipelineOutcome::Created(batch) => {
                body["auto_created"] = json!(true);
                if let (Value::Object(target), Ok(Value::Object(fields))) =
                    (&mut body, serde_json::to_value(batch))
                {
                    target.extend(fields);
                }
            }
        }

        body
    }

    /// The creation batch, when tasks were created
    pub fn batch(&self) -> Option<&BatchResult> {
        match &self.outcome {
            PipelineOutcome::Created(batch) => Some(batch),
            _ => None,
        }
    }
}

/// Orchestrates the extraction and task-creation stages
pub struct Pipeline<L, T>
where
    L: LlmProvider,
    T: TaskTracker,
{
    extractor: Extractor<L>,
    creator: TaskCreator<T>,
}

impl LivePipeline {
    /// Build clients for both remote services from configuration
    pub fn from_config(config: &DocketConfig) -> Result<Self, PipelineError> {
        let llm = AnthropicProvider::new(
            config.llm.api_key.as_str(),
            config.llm.model.as_str(),
            config.llm.timeout(),
        )
        .map_err(|e| PipelineError::Client(e.to_string()))?
        .with_endpoint(config.llm.endpoint.as_str())
        .with_max_tokens(config.llm.max_tokens);

        let tracker = MondayClient::new(&config.tracker.api_token, config.tracker.timeout())
            .map_err(|e| PipelineError::Client(e.to_string()))?
            .with_api_url(&config.tracker.api_url)
            .with_api_version(&config.tracker.api_version);

        Ok(Self::new(llm, tracker, config))
    }
}

impl<L, T> Pipeline<L, T>
where
    L: LlmProvider,
    T: TaskTracker,
{
    /// Wire the stages around the given clients
    pub fn new(llm: L, tracker: T, config: &DocketConfig) -> Self {
        Self {
            extractor: Extractor::new(llm, config.extraction.clone()),
            creator: TaskCreator::new(tracker).with_default_board(config.default_board_id.clone()),
        }
    }

    /// The extraction stage
    pub fn extractor(&self) -> &Extractor<L> {
        &self.extractor
    }

    /// The task-creation stage
    pub fn creator(&self) -> &TaskCreator<T> {
        &self.creator
    }

    /// Run extraction and, when requested, task creation
    pub async fn process_meeting(
        &self,
        request: &MeetingRequest,
    ) -> Result<PipelineResult, PipelineError> {
        let notes = &request.notes;
        let min = self.extractor.config().min_notes_chars;
        if !notes.meets_minimum(min) {
            return Err(PipelineError::NotesTooShort {
                actual: notes.trimmed_len(),
                min,
            });
        }

        let ExtractionResult {
            meeting_summary,
            action_items,
        } = self.extract(&notes.text, notes.title.as_deref()).await?;

        if action_items.is_empty() {
            info!("No action items found");
            return Ok(PipelineResult {
                meeting_summary,
                action_items,
                outcome: PipelineOutcome::NoActionItems,
            });
        }

        if !request.auto_create {
            info!("Returning {} action items for review", action_items.len());
            return Ok(PipelineResult {
                meeting_summary,
                action_items,
                outcome: PipelineOutcome::Extracted,
            });
        }

        let batch = self
            .create_tasks(
                &action_items,
                request.board_id.as_deref(),
                request.group_id.as_deref(),
                notes.title.as_deref(),
            )
            .await?;

        Ok(PipelineResult {
            meeting_summary,
            action_items,
            outcome: PipelineOutcome::Created(batch),
        })
    }

    /// Extraction stage only
    pub async fn extract(
        &self,
        notes: &str,
        title: Option<&str>,
    ) -> Result<ExtractionResult, PipelineError> {
        Ok(self.extractor.extract(notes, title).await?)
    }

    /// Task-creation stage only
    pub async fn create_tasks(
        &self,
        items: &[ActionItem],
        board_id: Option<&str>,
        group_id: Option<&str>,
        meeting_title: Option<&str>,
    ) -> Result<BatchResult, PipelineError> {
        Ok(self
            .creator
            .create_tasks(items, board_id, group_id, meeting_title)
            .await?)
    }

    /// Boards with their groups and columns
    pub async fn list_boards(&self) -> Result<Vec<Board>, PipelineError> {
        self.creator
            .tracker()
            .list_boards()
            .await
            .map_err(|e| PipelineError::Tracker(e.to_string()))
    }

    /// Users of the task service
    pub async fn list_users(&self) -> Result<Vec<User>, PipelineError> {
        self.creator
            .tracker()
            .list_users()
            .await
            .map_err(|e| PipelineError::Tracker(e.to_string()))
    }
}
