//! Docket task-tracker client
//!
//! Implements the `TaskTracker` seam from `docket-domain` against the
//! monday.com GraphQL API, plus an in-memory [`MockTracker`] for tests.
//!
//! # Example
//!
//! ```no_run
//! use docket_domain::traits::TaskTracker;
//! use docket_tracker::MondayClient;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), docket_tracker::TrackerError> {
//! let client = MondayClient::new("api-token", Duration::from_secs(60))?;
//! for board in client.list_boards().await? {
//!     println!("{} ({} groups)", board.name, board.groups.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod mock;
pub mod queries;

pub use client::MondayClient;
pub use error::TrackerError;
pub use mock::{MockTracker, RecordedItem};
