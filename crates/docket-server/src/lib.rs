//! Docket Server
//!
//! HTTP front end for the meeting-notes pipeline: extraction, task creation
//! and the combined process-meeting flow, plus board and user listings.

#![warn(missing_docs)]

pub mod handlers;

use docket_pipeline::{ConfigError, DocketConfig, LivePipeline, PipelineError};
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline construction error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `filter` when set.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the Docket HTTP server
///
/// Builds both remote clients from the configuration and serves until the
/// process is stopped.
pub async fn start_server(config: DocketConfig) -> Result<(), ServerError> {
    init_tracing(&config.log_filter);

    info!("Starting Docket server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.llm.model);
    match &config.default_board_id {
        Some(board) => info!("Default board: {}", board),
        None => info!("No default board configured"),
    }

    let pipeline = LivePipeline::from_config(&config)?;
    let app = create_router(AppState::new(pipeline));

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Docket listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = DocketConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = ServerError::from(ConfigError::MissingField("llm.api_key".into()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required configuration field: llm.api_key"
        );
    }
}
