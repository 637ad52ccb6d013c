//! monday.com GraphQL client implementation.

use crate::error::TrackerError;
use crate::queries;
use docket_domain::traits::{ColumnValues, TaskTracker};
use docket_domain::{Board, RemoteItem, User};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

/// Default value of the `API-Version` header
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Default transport timeout (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the task service's single query/mutation endpoint
pub struct MondayClient {
    api_url: String,
    api_token: String,
    api_version: String,
    client: reqwest::Client,
}

impl MondayClient {
    /// Create a new client against [`DEFAULT_API_URL`]
    pub fn new(api_token: &str, timeout: Duration) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            client,
        })
    }

    /// Use another endpoint URL
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Use another `API-Version` header value
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// Run a query or mutation and return its `data` member
    ///
    /// Fails when the transport fails or the body carries `errors`; the error
    /// message embeds the serialized error payload. No retries.
    pub async fn request(&self, query: &str, variables: Value) -> Result<Value, TrackerError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", &self.api_token)
            .header("API-Version", &self.api_version)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Error payloads can arrive with either status class
        let parsed: Option<Value> = serde_json::from_str(&body).ok();
        if let Some(errors) = parsed.as_ref().and_then(application_errors) {
            return Err(TrackerError::Api(errors));
        }

        if !status.is_success() {
            return Err(TrackerError::Transport(format!("HTTP {}: {}", status, body)));
        }

        let mut json = parsed.ok_or_else(|| {
            TrackerError::InvalidResponse(format!("Response is not JSON: {}", body))
        })?;

        match json.get_mut("data") {
            Some(data) if !data.is_null() => Ok(data.take()),
            _ => Err(TrackerError::InvalidResponse(
                "Response is missing 'data'".to_string(),
            )),
        }
    }

    /// Run a request and deserialize `data.<field>`
    async fn request_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T, TrackerError> {
        let mut data = self.request(query, variables).await?;
        let value = data
            .get_mut(field)
            .map(Value::take)
            .ok_or_else(|| TrackerError::InvalidResponse(format!("Response is missing '{}'", field)))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Serialized application-level errors, if the body reports any
fn application_errors(body: &Value) -> Option<String> {
    if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
        return Some(errors.to_string());
    }
    body.get("error_message")
        .filter(|e| !e.is_null())
        .map(|_| body.to_string())
}

impl TaskTracker for MondayClient {
    type Error = TrackerError;

    async fn list_boards(&self) -> Result<Vec<Board>, Self::Error> {
        let boards: Vec<Board> = self
            .request_field(queries::LIST_BOARDS, json!({}), "boards")
            .await?;
        debug!(count = boards.len(), "Fetched boards");
        Ok(boards)
    }

    async fn list_users(&self) -> Result<Vec<User>, Self::Error> {
        self.request_field(queries::LIST_USERS, json!({}), "users")
            .await
    }

    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: &ColumnValues,
    ) -> Result<RemoteItem, Self::Error> {
        let variables = json!({
            "boardId": board_id,
            "groupId": group_id,
            "itemName": item_name,
            "columnValues": serde_json::to_string(column_values)?,
        });
        self.request_field(queries::CREATE_ITEM, variables, "create_item")
            .await
    }

    async fn create_update(&self, item_id: &str, body: &str) -> Result<(), Self::Error> {
        let variables = json!({ "itemId": item_id, "body": body });
        self.request(queries::CREATE_UPDATE, variables).await?;
        Ok(())
    }
}
