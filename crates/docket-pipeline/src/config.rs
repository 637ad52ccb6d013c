//! Runtime configuration.
//!
//! Loads settings from an optional TOML file, then applies environment
//! overrides (`ANTHROPIC_API_KEY`, `MONDAY_API_TOKEN`, `MONDAY_BOARD_ID`,
//! `PORT`, `DOCKET_BIND_ADDRESS`, `DOCKET_MODEL`, `DOCKET_LOG`).

use docket_extractor::ExtractorConfig;
use docket_llm::anthropic;
use docket_tracker::client as monday;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A value is present but unusable
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Field or variable name
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocketConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port
    pub port: u16,

    /// Board used when a request names none
    pub default_board_id: Option<String>,

    /// `tracing` filter directive
    pub log_filter: String,

    /// Language-model settings
    pub llm: LlmConfig,

    /// Task service settings
    pub tracker: TrackerConfig,

    /// Extraction settings
    pub extraction: ExtractorConfig,
}

/// Language-model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key
    pub api_key: String,

    /// Base URL
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Completion budget
    pub max_tokens: u32,

    /// Transport timeout in seconds
    pub timeout_secs: u64,
}

/// Task service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// API token
    pub api_token: String,

    /// GraphQL endpoint
    pub api_url: String,

    /// `API-Version` header value
    pub api_version: String,

    /// Transport timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            default_board_id: None,
            log_filter: "info".to_string(),
            llm: LlmConfig::default(),
            tracker: TrackerConfig::default(),
            extraction: ExtractorConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: anthropic::DEFAULT_ENDPOINT.to_string(),
            model: anthropic::DEFAULT_MODEL.to_string(),
            max_tokens: anthropic::DEFAULT_MAX_TOKENS,
            timeout_secs: anthropic::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_url: monday::DEFAULT_API_URL.to_string(),
            api_version: monday::DEFAULT_API_VERSION.to_string(),
            timeout_secs: monday::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Transport timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl TrackerConfig {
    /// Transport timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DocketConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: DocketConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// File (when given), then process environment, then validation
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("ANTHROPIC_API_KEY") {
            self.llm.api_key = key;
        }
        if let Some(token) = var("MONDAY_API_TOKEN") {
            self.tracker.api_token = token;
        }
        if let Some(board) = var("MONDAY_BOARD_ID") {
            self.default_board_id = Some(board);
        }
        if let Some(port) = var("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                reason: format!("'{}' is not a port number", port),
            })?;
        }
        if let Some(address) = var("DOCKET_BIND_ADDRESS") {
            self.bind_address = address;
        }
        if let Some(model) = var("DOCKET_MODEL") {
            self.llm.model = model;
        }
        if let Some(filter) = var("DOCKET_LOG") {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.is_empty() {
            return Err(ConfigError::MissingField("llm.api_key (ANTHROPIC_API_KEY)".to_string()));
        }
        if self.tracker.api_token.is_empty() {
            return Err(ConfigError::MissingField(
                "tracker.api_token (MONDAY_API_TOKEN)".to_string(),
            ));
        }
        self.extraction
            .validate()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "extraction.min_notes_chars".to_string(),
                reason,
            })
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        DocketConfig {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            default_board_id: Some("test-board".to_string()),
            log_filter: "debug".to_string(),
            llm: LlmConfig {
                api_key: "test-key-do-not-use".to_string(),
                ..LlmConfig::default()
            },
            tracker: TrackerConfig {
                api_token: "test-token-do-not-use".to_string(),
                ..TrackerConfig::default()
            },
            extraction: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
