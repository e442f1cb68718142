//! Data source boundary
//!
//! The engine never fetches anything itself. A [`DataSource`] hands it one
//! read-only snapshot per resource, and the caller re-fetches after any
//! mutation. Credentials travel with every call as an explicit value.
//!
//! Two implementations ship with the crate:
//!
//! - [`JsonDirSource`]: one `<resource>.json` snapshot per resource in a
//!   directory, the format the back-office API serves
//! - [`MemorySource`]: raw values held in memory, for embedding and tests

pub mod error;
mod json_dir;
mod memory;

pub use error::SourceError;
pub use json_dir::JsonDirSource;
pub use memory::MemorySource;

use crate::browse::Browsable;
use crate::records::Resource;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

/// Source result type
pub type Result<T> = std::result::Result<T, SourceError>;

/// Bearer credentials passed into each fetch
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// Credentials carrying a bearer token
    ///
    /// A blank token counts as no token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// Anonymous credentials
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl From<Option<String>> for Credentials {
    fn from(token: Option<String>) -> Self {
        token.map_or_else(Self::anonymous, Self::with_token)
    }
}

// Keep tokens out of logs and panics
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Something that can supply record snapshots keyed by resource
pub trait DataSource {
    /// Fetch the raw JSON records of one resource
    ///
    /// # Errors
    /// Returns `SourceError` on transport, format or authorization failure.
    fn fetch_raw(&self, resource: Resource, credentials: &Credentials) -> Result<Vec<serde_json::Value>>;

    /// Fetch and decode a typed snapshot
    ///
    /// # Errors
    /// Returns `SourceError::Decode` naming the first record that does not
    /// fit `R`, or any error from [`DataSource::fetch_raw`].
    fn fetch<R>(&self, credentials: &Credentials) -> Result<Vec<R>>
    where
        R: Browsable + DeserializeOwned,
    {
        let resource = R::RESOURCE;
        let raw = self.fetch_raw(resource, credentials)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).map_err(|source| SourceError::Decode {
                    resource,
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<R>>>()?;

        debug!(%resource, count = records.len(), "fetched snapshot");
        Ok(records)
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn fetch_raw(&self, resource: Resource, credentials: &Credentials) -> Result<Vec<serde_json::Value>> {
        (**self).fetch_raw(resource, credentials)
    }
}

/// Split a parsed snapshot into its records
pub(crate) fn into_records(resource: Resource, value: serde_json::Value) -> Result<Vec<serde_json::Value>> {
    match value {
        serde_json::Value::Array(items) => Ok(items),
        _ => Err(SourceError::NotAnArray(resource)),
    }
}
