use super::{Credentials, DataSource, Result, SourceError, into_records};
use crate::records::Resource;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Snapshot directory holding one `<resource>.json` array per resource
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
    require_token: bool,
}

impl JsonDirSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            require_token: false,
        }
    }

    /// Refuse fetches that carry no token, like the live API does
    #[must_use]
    pub const fn require_token(mut self, required: bool) -> Self {
        self.require_token = required;
        self
    }

    /// Path of the snapshot file for one resource
    #[must_use]
    pub fn snapshot_path(&self, resource: Resource) -> PathBuf {
        self.dir.join(resource.file_name())
    }
}

impl DataSource for JsonDirSource {
    fn fetch_raw(&self, resource: Resource, credentials: &Credentials) -> Result<Vec<serde_json::Value>> {
        if self.require_token && !credentials.is_authenticated() {
            return Err(SourceError::Unauthorized(resource));
        }

        let path = self.snapshot_path(resource);
        if !path.is_file() {
            return Err(SourceError::MissingSnapshot { resource, path });
        }

        debug!(%resource, path = %path.display(), "reading snapshot");
        let contents = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&contents)
            .map_err(|source| SourceError::Parse { resource, source })?;
        into_records(resource, value)
    }
}
