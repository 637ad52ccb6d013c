//! Parse LLM output into an extraction result

use crate::error::ExtractorError;
use docket_domain::{ActionItem, ExtractionResult};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("code fence pattern"));

/// Parse the model's text into a meeting summary and action items
///
/// Entries without a usable `task_title` are dropped with a warning; a body
/// that is not JSON fails the whole call.
pub fn parse_llm_response(response: &str) -> Result<ExtractionResult, ExtractorError> {
    let json_str = strip_code_fence(response);

    let json: Value = serde_json::from_str(json_str.trim())?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected a JSON object".to_string()))?;

    let meeting_summary = obj
        .get("meeting_summary")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let raw_items = match obj.get("action_items") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => {
            return Err(ExtractorError::InvalidFormat(
                "'action_items' must be an array".to_string(),
            ))
        }
    };

    let mut action_items = Vec::with_capacity(raw_items.len());
    for (idx, raw) in raw_items.into_iter().enumerate() {
        match serde_json::from_value::<ActionItem>(raw) {
            Ok(item) if item.task_title.trim().is_empty() => {
                warn!("Action item {} has an empty task_title, skipping", idx);
            }
            Ok(item) => action_items.push(item),
            Err(e) => {
                warn!("Failed to parse action item {}: {}", idx, e);
            }
        }
    }

    Ok(ExtractionResult {
        meeting_summary,
        action_items,
    })
}

/// Return the inside of the first code fence, or the text unchanged
///
/// Only applies when the text contains a triple-backtick delimiter. Unpaired
/// or odd fencing falls through untouched and is left to JSON parsing.
pub fn strip_code_fence(response: &str) -> &str {
    if !response.contains("```") {
        return response;
    }
    CODE_FENCE
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(response)
}
