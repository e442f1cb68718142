//! Pagination windows with empty-row padding
//!
//! A window is computed from the size of the filtered view alone, so it is
//! independent of the record type and can be applied to any slice.

use super::error::BrowseError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows per page, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size the list screens start with
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(4));

    /// Validate a requested page size
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::InvalidViewState` for zero.
    pub fn new(size: usize) -> Result<Self, BrowseError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| BrowseError::InvalidViewState("page size must be positive".into()))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BrowseError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// One page of a filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// 0-based page index that was requested
    pub page_index: usize,
    pub page_size: PageSize,
    /// Size of the whole filtered view
    pub total: usize,
    /// Row range of the visible slice, clipped to `0..total`
    pub range: Range<usize>,
    /// Placeholder rows needed to keep the final page at full height
    pub empty_rows: usize,
}

impl PageWindow {
    /// Compute the window for `page_index` over a view of `total` rows
    ///
    /// Never fails: a page past the end gets an empty range and no padding.
    /// Padding is only emitted on the final page, and never more than
    /// `min(page_size, total)` minus the visible rows.
    #[must_use]
    pub fn new(total: usize, page_index: usize, page_size: PageSize) -> Self {
        let size = page_size.get();
        let start = page_index.saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        let visible = end - start;

        let empty_rows = if total > 0 && page_index == last_page_index(total, size) {
            size.min(total).saturating_sub(visible)
        } else {
            0
        };

        Self {
            page_index,
            page_size,
            total,
            range: start..end,
            empty_rows,
        }
    }

    /// Number of pages needed for `total` rows (zero for an empty view)
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size.get())
    }

    /// Number of real rows on this page
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.range.len()
    }

    /// Whether this is the final page of a non-empty view
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.total > 0 && self.page_index == last_page_index(self.total, self.page_size.get())
    }

    /// Whether the requested page lies past the end of the view
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        self.page_index >= self.page_count() && !(self.total == 0 && self.page_index == 0)
    }

    /// Slice the filtered view down to this page
    #[must_use]
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let end = self.range.end.min(items.len());
        let start = self.range.start.min(end);
        &items[start..end]
    }
}

const fn last_page_index(total: usize, size: usize) -> usize {
    total.div_ceil(size).saturating_sub(1)
}

/// Compute the page window and slice in one step
#[must_use]
pub fn paginate<T>(items: &[T], page_index: usize, page_size: PageSize) -> (&[T], PageWindow) {
    let window = PageWindow::new(items.len(), page_index, page_size);
    (window.slice(items), window)
}
