//! Per-session view state
//!
//! `ViewState` is the only mutable piece of the engine. Its fields are
//! private so the page-reset rules cannot be bypassed: changing the filter
//! text or the page size always returns to the first page.

use super::error::Result;
use super::models::{RecordId, SortDirection, normalize_field_name};
use super::paginate::PageSize;
use super::selection::{SelectAllState, SelectionSet};
use std::collections::HashSet;
use tracing::warn;

/// Sort, filter, page and selection state of one list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    sort_key: String,
    sort_direction: SortDirection,
    filter_text: String,
    page_index: usize,
    page_size: PageSize,
    selection: SelectionSet,
}

impl ViewState {
    /// Fresh state: unsorted, unfiltered, first page, nothing selected
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Builder-style initial sort
    #[must_use]
    pub fn with_sort(mut self, key: &str, direction: SortDirection) -> Self {
        self.set_sort(key, direction);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// 0-based page index
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Set the sort column and direction outright
    ///
    /// The key is normalised to its record field name. An empty key turns
    /// sorting off.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        self.sort_key = normalize_field_name(key);
        self.sort_direction = direction;
    }

    /// Header-click sorting
    ///
    /// Requesting the column that is already sorted ascending flips it to
    /// descending. Any other request sorts ascending by the requested column.
    /// An empty key is ignored.
    pub fn request_sort(&mut self, key: &str) {
        let key = normalize_field_name(key);
        if key.is_empty() {
            return;
        }

        let direction = if key == self.sort_key && self.sort_direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort_key = key;
        self.sort_direction = direction;
    }

    // ========================================================================
    // Filtering and paging
    // ========================================================================

    /// Replace the filter text and return to the first page
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.page_index = 0;
    }

    /// Change rows per page and return to the first page
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::InvalidViewState` for zero; the state is left
    /// unchanged in that case.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.page_size = PageSize::new(size)?;
        self.page_index = 0;
        Ok(())
    }

    /// Jump to a 0-based page
    ///
    /// Negative indices clamp to the first page. Indices past the end are
    /// kept (saturating at `usize::MAX`); the query returns an empty page
    /// for them.
    pub fn go_to_page(&mut self, index: i64) {
        self.page_index = if index < 0 {
            warn!(requested = index, "negative page index, clamping to 0");
            0
        } else {
            usize::try_from(index).unwrap_or(usize::MAX)
        };
    }

    pub const fn next_page(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    pub const fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Flip the selection of one record. Returns `true` if now selected.
    pub fn toggle_one(&mut self, id: RecordId) -> bool {
        self.selection.toggle_one(id)
    }

    /// Select-all over the ids of the current filtered view
    pub fn toggle_all<I>(&mut self, view_ids: I) -> SelectAllState
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.selection.toggle_all(view_ids)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop selected ids that are not among `live`. Returns how many went.
    pub fn reconcile_selection(&mut self, live: &HashSet<RecordId>) -> usize {
        self.selection.retain_ids(live)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
