//! Browser engine error types
//!
//! The engine itself only rejects malformed view state. Everything else a
//! query can run into (unknown sort keys, out-of-range pages, empty
//! collections) has a defined result instead of an error. Fetch failures
//! surface here when a [`BrowseSession`](super::BrowseSession) loads or
//! refreshes its snapshot.

use crate::source::SourceError;
use thiserror::Error;

/// Browse engine result type
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Errors that can occur while browsing a collection
#[derive(Debug, Error)]
pub enum BrowseError {
    /// View state that the engine refuses to work with
    #[error("Invalid view state: {0}")]
    InvalidViewState(String),

    /// The data source failed to deliver a snapshot
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
