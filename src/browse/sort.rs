//! Stable single-key sorting
//!
//! The comparator works on the ascending order of the resolved field values
//! and negates the result for descending. Sorting uses the standard library's
//! stable sort, so records with equal keys keep their collection order in
//! both directions.

use super::models::{Browsable, FieldValue, SortDirection};
use std::cmp::Ordering;

/// Compare two records on `sort_key` in the given direction
///
/// A record that lacks the key sorts after every record that has it under
/// ascending order (and before them under descending, by negation). Two
/// records that both lack it compare equal and keep their relative order.
#[must_use]
pub fn compare<R: Browsable>(a: &R, b: &R, sort_key: &str, direction: SortDirection) -> Ordering {
    direction.apply(compare_values(
        a.field(sort_key).as_ref(),
        b.field(sort_key).as_ref(),
    ))
}

/// Ascending comparison of two optional values
#[must_use]
pub fn compare_values(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.natural_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort records in place by `sort_key`
///
/// An empty key leaves the order untouched without resolving any field.
pub fn sort_records<R: Browsable>(records: &mut [&R], sort_key: &str, direction: SortDirection) {
    if sort_key.is_empty() {
        return;
    }
    records.sort_by(|a, b| compare(*a, *b, sort_key, direction));
}
