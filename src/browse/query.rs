//! Query pipeline: filter, then sort, then paginate
//!
//! A query never mutates the record snapshot or the view state. The filtered
//! view it returns is derived on every call, so results stay correct if a
//! caller memoises on (records, filter text, sort key, sort direction).

use super::filter::filter_records;
use super::models::{Browsable, RecordId};
use super::paginate::PageWindow;
use super::selection::SelectAllState;
use super::sort::sort_records;
use super::state::ViewState;
use tracing::{debug, warn};

/// Result of running a [`ViewState`] over a snapshot
#[derive(Debug)]
pub struct BrowseView<'a, R> {
    /// Whole filtered-and-sorted view, across all pages
    pub rows: Vec<&'a R>,
    /// Current page window and padding
    pub window: PageWindow,
    /// Selection summary over the filtered view
    pub select_all: SelectAllState,
}

impl<'a, R: Browsable> BrowseView<'a, R> {
    /// Records on the current page
    #[must_use]
    pub fn visible(&self) -> &[&'a R] {
        self.window.slice(&self.rows)
    }

    /// Ids of the whole filtered view, in view order
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.record_id()).collect()
    }

    /// True when the filter matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run the view state over a snapshot
///
/// `filter_field` is the screen's designated search field. Unknown sort or
/// filter fields are not errors: they are reported at `warn` and behave as a
/// field every record lacks.
pub fn query<'a, R: Browsable>(
    records: &'a [R],
    state: &ViewState,
    filter_field: &str,
) -> BrowseView<'a, R> {
    warn_if_unknown::<R>(records, "filter", filter_field, !state.filter_text().trim().is_empty());
    warn_if_unknown::<R>(records, "sort", state.sort_key(), !state.sort_key().is_empty());

    let mut rows = filter_records(records, filter_field, state.filter_text());
    sort_records(&mut rows, state.sort_key(), state.sort_direction());

    let window = PageWindow::new(rows.len(), state.page_index(), state.page_size());
    let ids: Vec<RecordId> = rows.iter().map(|r| r.record_id()).collect();
    let select_all = SelectAllState::of(state.selection(), &ids);

    debug!(
        resource = %R::RESOURCE,
        total = records.len(),
        matched = rows.len(),
        page = window.page_index,
        pages = window.page_count(),
        visible = window.visible_len(),
        empty_rows = window.empty_rows,
        "query"
    );

    BrowseView {
        rows,
        window,
        select_all,
    }
}

fn warn_if_unknown<R: Browsable>(records: &[R], role: &str, field: &str, in_use: bool) {
    if !in_use || R::column(field).is_some() {
        return;
    }
    if records.first().is_some_and(|r| r.field(field).is_none()) {
        warn!(resource = %R::RESOURCE, field, role, "unknown field");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::models::SortDirection;
    use crate::browse::paginate::PageSize;
    use crate::testing::Row;

    fn scenario() -> Vec<Row> {
        vec![
            Row::new(1, "Hanoi", 70.0),
            Row::new(2, "Hue", 71.0),
            Row::new(3, "Hanoi", 69.0),
        ]
    }

    fn visible_ids(view: &BrowseView<'_, Row>) -> Vec<i64> {
        view.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filter_sort_paginate_end_to_end() {
        let rows = scenario();
        let mut state = ViewState::new(PageSize::new(1).unwrap())
            .with_sort("buy", SortDirection::Ascending);
        state.set_filter("han");

        let view = query(&rows, &state, "city");
        assert_eq!(view.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(visible_ids(&view), vec![3]);
        assert_eq!(view.window.empty_rows, 0);

        state.next_page();
        let view = query(&rows, &state, "city");
        assert_eq!(visible_ids(&view), vec![1]);
        assert_eq!(view.window.empty_rows, 0);

        state.next_page();
        let view = query(&rows, &state, "city");
        assert!(visible_ids(&view).is_empty());
        assert_eq!(view.window.empty_rows, 0);
    }

    #[test]
    fn test_short_last_page_is_padded() {
        let rows: Vec<Row> = (1..=7).map(|i| Row::new(i, "Hue", 1.0)).collect();
        let mut state = ViewState::new(PageSize::new(5).unwrap());
        state.next_page();

        let view = query(&rows, &state, "city");
        assert_eq!(visible_ids(&view), vec![6, 7]);
        assert_eq!(view.window.empty_rows, 3);
    }

    #[test]
    fn test_select_all_is_scoped_to_filtered_view() {
        let rows = vec![
            Row::new(1, "Hanoi", 1.0),
            Row::new(2, "Hue", 1.0),
            Row::new(3, "Hanoi", 1.0),
            Row::new(4, "Da Nang", 1.0),
        ];
        let mut state = ViewState::new(PageSize::default());
        state.set_filter("hanoi");

        let view = query(&rows, &state, "city");
        assert_eq!(view.select_all, SelectAllState::None);
        state.toggle_all(view.ids());

        let view = query(&rows, &state, "city");
        assert_eq!(view.select_all, SelectAllState::All);
        assert_eq!(state.selection().len(), 2);

        state.set_filter("");
        let view = query(&rows, &state, "city");
        assert_eq!(view.select_all, SelectAllState::Partial);

        state.set_filter("hanoi");
        let view = query(&rows, &state, "city");
        state.toggle_all(view.ids());
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let rows: Vec<Row> = Vec::new();
        let state = ViewState::new(PageSize::default()).with_sort("buy", SortDirection::Descending);

        let view = query(&rows, &state, "city");
        assert!(view.is_empty());
        assert!(view.visible().is_empty());
        assert_eq!(view.window.empty_rows, 0);
        assert_eq!(view.select_all, SelectAllState::None);
    }

    #[test]
    fn test_unknown_fields_do_not_fail() {
        let rows = scenario();
        let mut state = ViewState::new(PageSize::default()).with_sort("weight", SortDirection::Descending);

        let view = query(&rows, &state, "city");
        assert_eq!(view.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        state.set_filter("x");
        let view = query(&rows, &state, "weight");
        assert!(view.is_empty());
    }
}
