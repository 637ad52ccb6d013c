//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use docket_domain::{Board, Column, Group, User};
use docket_llm::MockProvider;
use docket_pipeline::{DocketConfig, Pipeline};
use docket_server::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse};
use docket_tracker::MockTracker;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

const NOTES: &str = "Planning meeting. Sam will send the invoice by 2025-01-20. \
                     Priya will book the venue next Tuesday.";

const TWO_ITEMS: &str = r#"{
  "meeting_summary": "Event planning.",
  "action_items": [
    { "task_title": "Send invoice", "assignee": "Sam", "deadline": "2025-01-20", "priority": "high" },
    { "task_title": "Book venue", "assignee": "Priya", "deadline": "next Tuesday" }
  ]
}"#;

fn board() -> Board {
    Board {
        id: "B".to_string(),
        name: "Events".to_string(),
        groups: vec![Group {
            id: "g1".to_string(),
            title: "Upcoming".to_string(),
        }],
        columns: vec![Column {
            id: "d1".to_string(),
            title: "Due".to_string(),
            column_type: "date".to_string(),
        }],
    }
}

/// Helper to create a router over mocks, returning handles for call counting
fn create_test_app(llm_response: &str, tracker: MockTracker) -> (Router, MockProvider) {
    let mut config = DocketConfig::default_test_config();
    config.default_board_id = Some("B".to_string());
    let llm = MockProvider::new(llm_response);
    let app = create_router(AppState::new(Pipeline::new(llm.clone(), tracker, &config)));
    (app, llm)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _) = create_test_app(TWO_ITEMS, MockTracker::unreachable());

    let (status, body) = send(app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthCheckResponse = serde_json::from_value(body).unwrap();
    assert_eq!(health.status, "ok");
    let stamp = chrono::DateTime::parse_from_rfc3339(&health.timestamp).unwrap();
    let age = chrono::Utc::now().signed_duration_since(stamp);
    assert!(age.num_seconds().abs() < 60);
}

#[tokio::test]
async fn test_extract_endpoint() {
    let (app, llm) = create_test_app(TWO_ITEMS, MockTracker::new());

    let (status, body) = send(
        app,
        "POST",
        "/api/extract",
        Some(json!({ "meetingNotes": NOTES, "meetingTitle": "Planning" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["meeting_summary"], "Event planning.");
    assert_eq!(body["action_items"].as_array().unwrap().len(), 2);
    assert_eq!(body["action_items"][0]["priority"], "high");
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_short_notes_are_rejected_without_remote_calls() {
    let tracker = MockTracker::new().with_board(board());
    let (app, llm) = create_test_app(TWO_ITEMS, tracker.clone());

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/extract",
        Some(json!({ "meetingNotes": "too short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert!(!error.success);
    assert_eq!(error.kind, "validation");

    let (status, _) = send(
        app,
        "POST",
        "/api/process-meeting",
        Some(json!({ "meetingNotes": "too short", "autoCreate": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(llm.call_count(), 0);
    assert_eq!(tracker.call_count(), 0);
}

#[tokio::test]
async fn test_missing_notes_field_is_bad_request() {
    let (app, _) = create_test_app(TWO_ITEMS, MockTracker::new());

    let (status, body) = send(app, "POST", "/api/extract", Some(json!({ "notes": NOTES }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_malformed_model_output_is_server_error() {
    let (app, _) = create_test_app("not json at all", MockTracker::new());

    let (status, body) = send(app, "POST", "/api/extract", Some(json!({ "meetingNotes": NOTES }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "parse");
}

#[tokio::test]
async fn test_process_meeting_review_mode() {
    let tracker = MockTracker::new().with_board(board());
    let (app, _) = create_test_app(TWO_ITEMS, tracker.clone());

    let (status, body) = send(
        app,
        "POST",
        "/api/process-meeting",
        Some(json!({ "meetingNotes": NOTES })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["auto_created"], false);
    assert_eq!(body["action_items"].as_array().unwrap().len(), 2);
    assert_eq!(tracker.call_count(), 0);
}

#[tokio::test]
async fn test_process_meeting_auto_create() {
    let tracker = MockTracker::new().with_board(board());
    let (app, _) = create_test_app(TWO_ITEMS, tracker.clone());

    let (status, body) = send(
        app,
        "POST",
        "/api/process-meeting",
        Some(json!({ "meetingNotes": NOTES, "meetingTitle": "Planning", "autoCreate": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auto_created"], true);
    assert_eq!(body["created"], 2);
    assert_eq!(body["failed"], 0);
    assert_eq!(body["board"]["id"], "B");
    assert_eq!(body["group"]["id"], "g1");
    assert_eq!(tracker.created_items().len(), 2);
}

#[tokio::test]
async fn test_process_meeting_without_items() {
    let (app, _) = create_test_app(
        r#"{"meeting_summary": "Status only.", "action_items": []}"#,
        MockTracker::new(),
    );

    let (status, body) = send(
        app,
        "POST",
        "/api/process-meeting",
        Some(json!({ "meetingNotes": NOTES, "autoCreate": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No action items found in meeting notes");
    assert_eq!(body["action_items"], json!([]));
}

#[tokio::test]
async fn test_create_tasks_with_partial_failure() {
    let tracker = MockTracker::new().with_board(board()).reject_item("Book venue");
    let (app, _) = create_test_app(TWO_ITEMS, tracker);

    let (status, body) = send(
        app,
        "POST",
        "/api/create-tasks",
        Some(json!({
            "actionItems": [
                { "task_title": "Send invoice", "deadline": "2025-01-20" },
                { "task_title": "Book venue" }
            ],
            "boardId": "B"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["created"], 1);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["errors"][0]["action_item"]["task_title"], "Book venue");
}

#[tokio::test]
async fn test_create_tasks_accepts_loosely_typed_items() {
    let tracker = MockTracker::new().with_board(board());
    let (app, _) = create_test_app(TWO_ITEMS, tracker);

    let (status, body) = send(
        app,
        "POST",
        "/api/create-tasks",
        Some(json!({
            "actionItems": [
                { "task_title": "Good one" },
                { "task_title": "Two owners", "assignee": ["Sam", "Priya"] }
            ],
            "boardId": "B"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], 2);
    assert_eq!(body["failed"], 0);
    assert_eq!(body["results"][1]["action_item"]["assignee"], "Sam, Priya");
}

#[tokio::test]
async fn test_create_tasks_validation_errors() {
    let tracker = MockTracker::new().with_board(board());
    let (app, _) = create_test_app(TWO_ITEMS, tracker.clone());

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/create-tasks",
        Some(json!({ "actionItems": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/create-tasks",
        Some(json!({ "actionItems": [{ "task_title": "A" }], "boardId": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, _) = send(
        app,
        "POST",
        "/api/create-tasks",
        Some(json!({ "actionItems": [{ "task_title": "A" }], "boardId": "B", "groupId": "g9" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(tracker.created_items().is_empty());
}

#[tokio::test]
async fn test_list_boards_and_users() {
    let tracker = MockTracker::new().with_board(board()).with_users(vec![User {
        id: "7".to_string(),
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
    }]);
    let (app, _) = create_test_app(TWO_ITEMS, tracker);

    let (status, body) = send(app.clone(), "GET", "/api/boards", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["boards"][0]["groups"][0]["id"], "g1");
    assert_eq!(body["boards"][0]["columns"][0]["type"], "date");

    let (status, body) = send(app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"][0]["name"], "Ada");
}

#[tokio::test]
async fn test_remote_failure_is_server_error() {
    let (app, _) = create_test_app(TWO_ITEMS, MockTracker::unreachable());

    let (status, body) = send(app, "GET", "/api/boards", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "remote");
}
