//! Data source error types
//!
//! Every variant names the resource it failed on so a caller juggling
//! several screens can tell which fetch went wrong.

use crate::records::Resource;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching a snapshot
#[derive(Debug, Error)]
pub enum SourceError {
    /// No snapshot file exists for the resource
    #[error("No snapshot for {resource} at {}", .path.display())]
    MissingSnapshot { resource: Resource, path: PathBuf },

    /// Reading the snapshot failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON
    #[error("Malformed {resource} snapshot: {source}")]
    Parse {
        resource: Resource,
        source: serde_json::Error,
    },

    /// One element of the snapshot does not fit the record type
    #[error("Invalid {resource} record at index {index}: {source}")]
    Decode {
        resource: Resource,
        index: usize,
        source: serde_json::Error,
    },

    /// The snapshot is valid JSON but not an array of records
    #[error("Snapshot for {0} is not a JSON array")]
    NotAnArray(Resource),

    /// The source requires a token and none was supplied
    #[error("Not authorized to fetch {0}: missing token")]
    Unauthorized(Resource),
}
