//! Data models for the browser engine
//!
//! These are pure data structures with minimal logic. The engine never looks
//! inside a record directly: everything it needs goes through the
//! [`Browsable`] accessor trait, which is what lets one engine serve every
//! list screen.

use crate::records::Resource;
use chrono::{DateTime, Utc};
use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Record Access
// ============================================================================

/// A record the engine can sort, filter and select
///
/// Implementors expose their fields by name. Names are lowerCamelCase and
/// match the keys listed in [`Browsable::columns`].
pub trait Browsable {
    /// The resource this record type belongs to
    const RESOURCE: Resource;

    /// Row identity within one snapshot
    fn record_id(&self) -> RecordId;

    /// Resolve a field by name, `None` if the record has no such field
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Displayable columns, in table order
    fn columns() -> &'static [Column];

    /// Look up a column by its field key
    #[must_use]
    fn column(key: &str) -> Option<&'static Column> {
        Self::columns().iter().find(|c| c.key == key)
    }
}

/// One table column: field key plus header label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Unique identifier of a record within one collection snapshot
///
/// Only used for selection and row identity. It is never reinterpreted as a
/// sort or filter key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// A comparable field value
///
/// Text borrows from the record where it can. Numbers are compared with IEEE
/// total ordering so NaN cannot break the sort.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// String value, compared lexicographically
    Text(Cow<'a, str>),

    /// Numeric value, compared numerically
    Number(f64),

    /// Timestamp, compared chronologically
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Rank used when two values of different kinds meet
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Natural ascending order of two values
    ///
    /// Same-kind values use their natural order. Mixed kinds order
    /// `Number < Date < Text`, which keeps this a total order.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.as_ref().cmp(b.as_ref()),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }

    /// String form used for text matching and display
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_ref()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.format("%d/%m/%Y")),
        }
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for FieldValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering
    ///
    /// Descending negates the result, it never reverses a sorted sequence.
    #[must_use]
    pub const fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            Self::Ascending => ascending,
            Self::Descending => ascending.reverse(),
        }
    }

    /// Short label for headers and prompts
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

// ============================================================================
// Field Names
// ============================================================================

/// Normalise a user-supplied field name to the lowerCamelCase record key
///
/// `buy_price`, `buy-price`, `BUY_PRICE` and `buyPrice` all become
/// `buyPrice`. Blank input stays empty, which the engine reads as "no key".
#[must_use]
pub fn normalize_field_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.to_lower_camel_case()
}
