//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use chrono::{Local, NaiveDate};
use docket_domain::traits::LlmProvider;
use docket_domain::{title_or_default, trimmed_char_count, ExtractionResult};
use std::time::Instant;
use tracing::{debug, info, warn};

/// The Extractor turns meeting notes into action items
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// The underlying LLM provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Extraction settings
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract action items, using the local date as "today"
    pub async fn extract(
        &self,
        notes: &str,
        title: Option<&str>,
    ) -> Result<ExtractionResult, ExtractorError> {
        self.extract_with_date(notes, title, Local::now().date_naive())
            .await
    }

    /// Extract action items with an explicit "today" for relative deadlines
    ///
    /// Notes under the configured minimum are rejected before any model call.
    pub async fn extract_with_date(
        &self,
        notes: &str,
        title: Option<&str>,
        today: NaiveDate,
    ) -> Result<ExtractionResult, ExtractorError> {
        let actual = trimmed_char_count(notes);
        if actual < self.config.min_notes_chars {
            return Err(ExtractorError::NotesTooShort {
                actual,
                min: self.config.min_notes_chars,
            });
        }

        info!(
            "Extracting action items from '{}' ({} chars)",
            title_or_default(title),
            actual
        );

        let prompt = PromptBuilder::new(notes, title, today).build();
        debug!("Prompt length: {} chars", prompt.len());

        let start = Instant::now();
        let response = self.llm_provider.generate(&prompt).await.map_err(|e| {
            warn!("LLM call failed: {}", e);
            ExtractorError::Llm(e.to_string())
        })?;
        debug!(
            "LLM responded in {}ms with {} chars",
            start.elapsed().as_millis(),
            response.len()
        );

        let result = parse_llm_response(&response).map_err(|e| {
            warn!("Could not parse LLM response: {}", e);
            e
        })?;

        info!("Extracted {} action items", result.action_items.len());
        Ok(result)
    }
}
