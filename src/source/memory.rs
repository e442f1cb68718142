use super::{Credentials, DataSource, Result, SourceError};
use crate::records::Resource;
use std::collections::HashMap;

/// In-memory snapshots keyed by resource
///
/// A resource that was never inserted fetches as an empty collection.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snapshots: HashMap<Resource, Vec<serde_json::Value>>,
    require_token: bool,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn require_token(mut self, required: bool) -> Self {
        self.require_token = required;
        self
    }

    /// Replace the snapshot of one resource with raw values
    pub fn insert_raw(&mut self, resource: Resource, records: Vec<serde_json::Value>) {
        self.snapshots.insert(resource, records);
    }
}

impl DataSource for MemorySource {
    fn fetch_raw(&self, resource: Resource, credentials: &Credentials) -> Result<Vec<serde_json::Value>> {
        if self.require_token && !credentials.is_authenticated() {
            return Err(SourceError::Unauthorized(resource));
        }
        Ok(self.snapshots.get(&resource).cloned().unwrap_or_default())
    }
}
