//! Anthropic Provider Implementation
//!
//! Single-turn completion against the Anthropic Messages API.
//!
//! # Features
//!
//! - Async HTTP communication with the Messages API
//! - Configurable endpoint, model and output bound
//! - Transport timeout handling
//!
//! No retries: a failed call is reported to the caller immediately.
//!
//! # Examples
//!
//! ```no_run
//! use docket_llm::AnthropicProvider;
//! use std::time::Duration;
//!
//! let provider = AnthropicProvider::new("sk-...", "claude-sonnet-4-20250514", Duration::from_secs(60))
//!     .unwrap()
//!     .with_max_tokens(2000);
//! ```

use crate::LlmError;
use docket_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default Messages API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default model
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default bound on generated tokens
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Value of the `anthropic-version` header
pub const API_VERSION: &str = "2023-06-01";

/// Messages API provider
pub struct AnthropicProvider {
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

/// Request body for the Messages API
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from the Messages API
#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicProvider {
    /// Create a new provider against [`DEFAULT_ENDPOINT`]
    ///
    /// # Parameters
    ///
    /// - `api_key`: Messages API key
    /// - `model`: Model to use
    /// - `timeout`: Transport timeout for each call
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            client,
        })
    }

    /// Point the provider at another endpoint (base URL, no path)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the bound on generated tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Model this provider calls
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using the Messages API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached or times out (`Communication`)
    /// - The API answers with a non-success status or an `error` body (`Api`)
    /// - The body carries no text content (`InvalidResponse`)
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/v1/messages", self.endpoint);

        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "Calling Messages API");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = json.get("error") {
            return Err(LlmError::Api(error.to_string()));
        }

        let parsed: MessagesResponse = serde_json::from_value(json)
            .map_err(|e| LlmError::InvalidResponse(format!("Unexpected response shape: {}", e)))?;

        parsed
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no text content".to_string()))
    }
}

impl LlmProviderTrait for AnthropicProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.complete(prompt).await
    }
}
