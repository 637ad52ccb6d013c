//! Configuration for the Extractor

use docket_domain::MIN_NOTES_CHARS;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Minimum notes length in characters, after trimming
    pub min_notes_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_notes_chars == 0 {
            return Err("min_notes_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_notes_chars: MIN_NOTES_CHARS,
        }
    }
}
