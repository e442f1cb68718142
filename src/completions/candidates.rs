//! Static completion candidates
//!
//! These candidates need no data or config access.

use crate::records::Resource;

/// A completion suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The value to insert
    pub value: String,
    /// Optional help text shown alongside
    pub help: Option<String>,
}

impl Candidate {
    /// Create a new candidate with just a value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: None,
        }
    }

    /// Add help text to the candidate
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Known configuration keys for `config set`
///
/// Per-screen keys are listed once per resource.
#[must_use]
pub fn config_keys() -> Vec<Candidate> {
    let mut keys = vec![
        Candidate::new("data_dir").with_help("Directory holding <resource>.json snapshots"),
        Candidate::new("page_size").with_help("Default rows per page"),
        Candidate::new("require_token").with_help("Refuse fetches without a token (true/false)"),
        Candidate::new("quiet").with_help("Suppress informational output"),
    ];

    for resource in Resource::ALL {
        let prefix = format!("screens.{}", resource.name());
        keys.extend([
            Candidate::new(format!("{prefix}.filter_field")).with_help("Field the filter matches"),
            Candidate::new(format!("{prefix}.sort_key")).with_help("Initial sort column"),
            Candidate::new(format!("{prefix}.sort_direction")).with_help("asc or desc"),
            Candidate::new(format!("{prefix}.page_size")).with_help("Rows per page"),
        ]);
    }
    keys
}

/// Candidates matching a typed prefix
#[must_use]
pub fn complete_config_key(current: &str) -> Vec<Candidate> {
    config_keys()
        .into_iter()
        .filter(|c| c.value.starts_with(current))
        .collect()
}
