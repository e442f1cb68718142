//! Case-insensitive substring filter
//!
//! Each screen matches its search box against one designated field. A blank
//! search is the identity: every record passes, in its original order.

use super::models::{Browsable, FieldValue};
use std::fmt;

/// Compiled text filter
///
/// Holds the lowercased needle so matching a whole collection folds the
/// search text once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    /// Build a filter from raw search text
    ///
    /// Empty or whitespace-only text gives a pass-through filter. Other text
    /// is used as typed (not trimmed), only case-folded.
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.trim().is_empty() {
            Self { needle: None }
        } else {
            Self {
                needle: Some(text.to_lowercase()),
            }
        }
    }

    /// Whether this filter lets everything through
    #[must_use]
    pub const fn is_pass_through(&self) -> bool {
        self.needle.is_none()
    }

    /// Test one field value
    ///
    /// A missing value only passes a pass-through filter.
    #[must_use]
    pub fn matches(&self, value: Option<&FieldValue<'_>>) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        value.is_some_and(|v| v.as_text().to_lowercase().contains(needle.as_str()))
    }

    /// Test a record on the given field
    #[must_use]
    pub fn matches_record<R: Browsable>(&self, record: &R, field: &str) -> bool {
        self.is_pass_through() || self.matches(record.field(field).as_ref())
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.needle {
            Some(needle) => write!(f, "contains \"{needle}\""),
            None => f.write_str("(none)"),
        }
    }
}

/// Keep the records whose `field` contains `text`, case-insensitively
///
/// Returns a subsequence of the input in input order.
pub fn filter_records<'a, R, I>(records: I, field: &str, text: &str) -> Vec<&'a R>
where
    R: Browsable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let filter = TextFilter::new(text);
    records
        .into_iter()
        .filter(|record| filter.matches_record(*record, field))
        .collect()
}
