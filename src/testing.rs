//! Testing utilities for goldleaf
//!
//! This module provides a minimal `Row` record for exercising the engine
//! without a real domain type, and a `TestDataDir` fixture that lays out
//! snapshot files the way `JsonDirSource` expects them.
//!
//! Only available when compiled with `cfg(test)`.

use crate::browse::{Browsable, Column, FieldValue, RecordId};
use crate::records::Resource;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Small record with one text, one numeric and one optional field
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i64,
    pub city: String,
    pub buy: f64,
    pub note: Option<String>,
}

impl Row {
    pub fn new(id: i64, city: &str, buy: f64) -> Self {
        Self {
            id,
            city: city.to_string(),
            buy,
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    #[must_use]
    pub fn without_note(mut self) -> Self {
        self.note = None;
        self
    }
}

const ROW_COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::new("city", "City"),
    Column::new("buy", "Buy"),
    Column::new("note", "Note"),
];

impl Browsable for Row {
    const RESOURCE: Resource = Resource::GoldPrices;

    fn record_id(&self) -> RecordId {
        self.id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "city" => Some(self.city.as_str().into()),
            "buy" => Some(self.buy.into()),
            "note" => self.note.as_deref().map(FieldValue::text),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        ROW_COLUMNS
    }
}

/// Temporary snapshot directory, removed on drop
///
/// # Panics
/// Constructors and writers panic on I/O failure; this is test-only code.
pub struct TestDataDir {
    dir: TempDir,
}

impl TestDataDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp data dir"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the snapshot file for one resource
    pub fn write(&self, resource: Resource, contents: &str) {
        fs::write(self.dir.path().join(resource.file_name()), contents)
            .expect("Failed to write snapshot");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_fields() {
        let row = Row::new(3, "Hanoi", 69.0).with_note("vip");
        assert_eq!(row.record_id(), RecordId::from(3));
        assert_eq!(row.field("city"), Some(FieldValue::text("Hanoi")));
        assert_eq!(row.field("note"), Some(FieldValue::text("vip")));
        assert_eq!(row.without_note().field("note"), None);
    }

    #[test]
    fn test_data_dir_write() {
        let data = TestDataDir::new();
        data.write(Resource::Bills, "[]");
        assert!(data.path().join("bills.json").is_file());
    }
}
