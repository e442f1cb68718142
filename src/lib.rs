//! goldleaf - record browser for a jewellery shop's back office
//!
//! This library provides a generic table engine (sort, filter, paginate,
//! select) over the shop's list screens: customers, staff, promotions,
//! bills and gold prices. Records come from a pluggable data source and
//! are browsed as read-only snapshots.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod output;
pub mod records;
pub mod source;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GoldleafError {
    /// Browse engine error
    #[error("Browse error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// Data source error
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
