//! Docket Extractor
//!
//! Turns free-form meeting notes into structured action items using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Notes → length check → prompt → LLM → fence stripping → JSON → ExtractionResult
//! ```
//!
//! A single model call is made per extraction. The prompt carries today's
//! date so the model can resolve relative deadlines such as "next Friday".
//!
//! # Example Usage
//!
//! ```
//! use docket_extractor::{Extractor, ExtractorConfig};
//! use docket_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(
//!     r#"{"meeting_summary": "Sync", "action_items": [{"task_title": "Send deck"}]}"#,
//! );
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let notes = "Alice will send the updated deck to the client before the Thursday review.";
//! let result = extractor.extract(notes, Some("Client sync")).await?;
//! assert_eq!(result.action_items[0].task_title, "Send deck");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::{parse_llm_response, strip_code_fence};
pub use prompt::PromptBuilder;
