//! HTTP request handlers for the Docket server.
//!
//! Every endpoint answers JSON; failures share the shape
//! `{ "success": false, "error": <message>, "kind": <error kind> }`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use chrono::{SecondsFormat, Utc};
use docket_domain::traits::{LlmProvider, TaskTracker};
use docket_domain::{ActionItem, ErrorKind, MeetingNotes};
use docket_pipeline::{MeetingRequest, Pipeline, PipelineError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared application state
pub struct AppState<L, T>
where
    L: LlmProvider,
    T: TaskTracker,
{
    /// The meeting-notes pipeline
    pub pipeline: Arc<Pipeline<L, T>>,
}

impl<L, T> AppState<L, T>
where
    L: LlmProvider,
    T: TaskTracker,
{
    /// Wrap a pipeline for sharing across requests
    pub fn new(pipeline: Pipeline<L, T>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

impl<L, T> Clone for AppState<L, T>
where
    L: LlmProvider,
    T: TaskTracker,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// POST /api/extract body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    /// Raw meeting notes
    pub meeting_notes: String,
    /// Optional meeting title
    #[serde(default)]
    pub meeting_title: Option<String>,
}

/// POST /api/create-tasks body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTasksRequest {
    /// Items to create
    pub action_items: Vec<ActionItem>,
    /// Target board
    #[serde(default)]
    pub board_id: Option<String>,
    /// Target group
    #[serde(default)]
    pub group_id: Option<String>,
    /// Meeting title for the task notes
    #[serde(default)]
    pub meeting_title: Option<String>,
}

/// POST /api/process-meeting body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMeetingRequest {
    /// Raw meeting notes
    pub meeting_notes: String,
    /// Optional meeting title
    #[serde(default)]
    pub meeting_title: Option<String>,
    /// Target board
    #[serde(default)]
    pub board_id: Option<String>,
    /// Target group
    #[serde(default)]
    pub group_id: Option<String>,
    /// Create tasks without a review step
    #[serde(default)]
    pub auto_create: bool,
}

impl From<ProcessMeetingRequest> for MeetingRequest {
    fn from(req: ProcessMeetingRequest) -> Self {
        MeetingRequest {
            notes: MeetingNotes::new(req.meeting_notes, req.meeting_title),
            board_id: req.board_id,
            group_id: req.group_id,
            auto_create: req.auto_create,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Current time, RFC 3339 UTC
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
    /// Machine-readable error kind
    pub kind: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be read
    BadRequest(String),
    /// Pipeline failure
    Pipeline(PipelineError),
    /// Internal server error
    InternalError(String),
}

impl AppError {
    fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::Validation,
            AppError::Pipeline(e) => e.kind(),
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Remote | ErrorKind::Parse | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Pipeline(e) => e.to_string(),
            AppError::InternalError(msg) => msg,
        };

        if status.is_server_error() {
            error!("Request failed ({}): {}", kind, message);
        } else {
            warn!("Request rejected ({}): {}", kind, message);
        }

        let body = Json(ErrorResponse {
            success: false,
            error: message,
            kind: kind.as_str().to_string(),
        });
        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

fn with_success(mut body: Value) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert("success".to_string(), Value::Bool(true));
    }
    body
}

/// GET / - Static front page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/health - Liveness check, independent of remote services
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// GET /api/boards - Boards with groups and columns
async fn list_boards<L, T>(State(state): State<AppState<L, T>>) -> Result<Json<Value>, AppError>
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    let boards = state.pipeline.list_boards().await?;
    Ok(Json(json!({ "success": true, "boards": boards })))
}

/// GET /api/users - Users of the task service
async fn list_users<L, T>(State(state): State<AppState<L, T>>) -> Result<Json<Value>, AppError>
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    let users = state.pipeline.list_users().await?;
    Ok(Json(json!({ "success": true, "users": users })))
}

/// POST /api/extract - Extraction only
async fn extract<L, T>(
    State(state): State<AppState<L, T>>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError>
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    let Json(request) = payload?;
    let result = state
        .pipeline
        .extract(&request.meeting_notes, request.meeting_title.as_deref())
        .await?;

    Ok(Json(json!({
        "success": true,
        "meeting_summary": result.meeting_summary,
        "action_items": result.action_items,
    })))
}

/// POST /api/create-tasks - Task creation for reviewed items
async fn create_tasks<L, T>(
    State(state): State<AppState<L, T>>,
    payload: Result<Json<CreateTasksRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError>
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    let Json(request) = payload?;
    let batch = state
        .pipeline
        .create_tasks(
            &request.action_items,
            request.board_id.as_deref(),
            request.group_id.as_deref(),
            request.meeting_title.as_deref(),
        )
        .await?;

    let body = serde_json::to_value(&batch)
        .map_err(|e| AppError::InternalError(format!("Failed to encode result: {}", e)))?;
    Ok(Json(with_success(body)))
}

/// POST /api/process-meeting - Extraction plus optional task creation
async fn process_meeting<L, T>(
    State(state): State<AppState<L, T>>,
    payload: Result<Json<ProcessMeetingRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError>
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    let Json(request) = payload?;
    let result = state.pipeline.process_meeting(&request.into()).await?;

    info!(
        "Processed meeting: {} action items, auto_created={}",
        result.action_items.len(),
        result.batch().is_some()
    );
    Ok(Json(with_success(result.to_json())))
}

/// Create the axum router with all routes
pub fn create_router<L, T>(state: AppState<L, T>) -> AxumRouter
where
    L: LlmProvider + 'static,
    T: TaskTracker + 'static,
{
    AxumRouter::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/boards", get(list_boards::<L, T>))
        .route("/api/users", get(list_users::<L, T>))
        .route("/api/extract", post(extract::<L, T>))
        .route("/api/create-tasks", post(create_tasks::<L, T>))
        .route("/api/process-meeting", post(process_meeting::<L, T>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use docket_llm::MockProvider;
    use docket_pipeline::DocketConfig;
    use docket_tracker::MockTracker;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState<MockProvider, MockTracker> {
        let config = DocketConfig::default_test_config();
        AppState::new(Pipeline::new(
            MockProvider::new("{}"),
            MockTracker::new(),
            &config,
        ))
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Remote), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(ErrorKind::Parse), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_router(create_test_state());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
