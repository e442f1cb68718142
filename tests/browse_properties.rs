//! Property-based tests for the browser engine.
//!
//! These check the laws every list screen relies on:
//! - Sorting is stable in both directions and never drops or duplicates rows
//! - Filtering returns an in-order subsequence, is idempotent and commutes
//!   with sorting
//! - Pages partition the filtered view, padding only the last page
//! - Selection toggles are involutions scoped to the ids they are given

use goldleaf::browse::{
    Browsable, Column, FieldValue, PageSize, PageWindow, RecordId, SelectAllState, SelectionSet,
    SortDirection, filter_records, paginate, sort_records,
};
use goldleaf::records::Resource;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Item {
    id: usize,
    rank: Option<u8>,
    name: String,
}

const COLUMNS: &[Column] = &[Column::new("rank", "Rank"), Column::new("name", "Name")];

impl Browsable for Item {
    const RESOURCE: Resource = Resource::GoldPrices;

    fn record_id(&self) -> RecordId {
        RecordId::new(self.id.to_string())
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "rank" => self.rank.map(|r| FieldValue::Number(f64::from(r))),
            "name" => Some(FieldValue::text(&self.name)),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }
}

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D ]{0,8}").unwrap()
}

/// Few distinct ranks so ties are common
fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((prop::option::of(0u8..4), name_strategy()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (rank, name))| Item { id, rank, name })
            .collect()
    })
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    (1usize..12).prop_map(|n| PageSize::new(n).unwrap())
}

fn ids_strategy() -> impl Strategy<Value = Vec<RecordId>> {
    prop::collection::vec(0u8..20, 0..15)
        .prop_map(|ids| ids.into_iter().map(|id| RecordId::from(i64::from(id))).collect())
}

// =============================================================================
// SORT PROPERTY TESTS
// =============================================================================

mod sort_properties {
    use super::*;

    proptest! {
        /// Sorting permutes the input without losing rows
        #[test]
        fn sort_is_a_permutation(items in items_strategy(), direction in direction_strategy()) {
            let mut rows: Vec<&Item> = items.iter().collect();
            sort_records(&mut rows, "rank", direction);

            let mut ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..items.len()).collect::<Vec<_>>());
        }

        /// Rows with equal keys keep their input order in either direction
        #[test]
        fn sort_is_stable(items in items_strategy(), direction in direction_strategy()) {
            let mut rows: Vec<&Item> = items.iter().collect();
            sort_records(&mut rows, "rank", direction);

            for pair in rows.windows(2) {
                if pair[0].rank == pair[1].rank {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        /// Rows lacking the key go last ascending and first descending
        #[test]
        fn missing_keys_are_grouped(items in items_strategy(), direction in direction_strategy()) {
            let mut rows: Vec<&Item> = items.iter().collect();
            sort_records(&mut rows, "rank", direction);

            let present: Vec<bool> = rows.iter().map(|r| r.rank.is_some()).collect();
            let leading = match direction {
                SortDirection::Ascending => true,
                SortDirection::Descending => false,
            };
            let split = present.iter().position(|p| *p != leading).unwrap_or(present.len());
            prop_assert!(present[split..].iter().all(|p| *p != leading));
        }

        /// An empty key leaves the input order alone
        #[test]
        fn empty_key_is_identity(items in items_strategy(), direction in direction_strategy()) {
            let mut rows: Vec<&Item> = items.iter().collect();
            sort_records(&mut rows, "", direction);
            let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
            prop_assert_eq!(ids, (0..items.len()).collect::<Vec<_>>());
        }
    }
}

// =============================================================================
// FILTER PROPERTY TESTS
// =============================================================================

mod filter_properties {
    use super::*;

    proptest! {
        /// Blank filter text keeps every row in order
        #[test]
        fn blank_filter_is_identity(items in items_strategy(), spaces in 0usize..4) {
            let text = " ".repeat(spaces);
            let rows = filter_records(&items, "name", &text);
            let ids: Vec<usize> = rows.iter().map(|r| r.id).collect();
            prop_assert_eq!(ids, (0..items.len()).collect::<Vec<_>>());
        }

        /// Filtering twice with the same text changes nothing
        #[test]
        fn filter_is_idempotent(items in items_strategy(), text in "[a-dA-D]{1,3}") {
            let once = filter_records(&items, "name", &text);
            let twice = filter_records(once.iter().copied(), "name", &text);
            prop_assert_eq!(
                once.iter().map(|r| r.id).collect::<Vec<_>>(),
                twice.iter().map(|r| r.id).collect::<Vec<_>>()
            );
        }

        /// Output is an in-order subsequence of exactly the matching rows
        #[test]
        fn filter_keeps_matching_rows_in_order(items in items_strategy(), text in "[a-dA-D]{1,3}") {
            let rows = filter_records(&items, "name", &text);
            let needle = text.to_lowercase();
            let expected: Vec<usize> = items
                .iter()
                .filter(|i| i.name.to_lowercase().contains(&needle))
                .map(|i| i.id)
                .collect();
            prop_assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
        }

        /// Case of the filter text never matters
        #[test]
        fn filter_ignores_case(items in items_strategy(), text in "[a-dA-D]{1,3}") {
            let lower = filter_records(&items, "name", &text.to_lowercase());
            let upper = filter_records(&items, "name", &text.to_uppercase());
            prop_assert_eq!(lower.len(), upper.len());
        }

        /// Filtering before or after sorting yields the same ordered rows
        #[test]
        fn filter_commutes_with_sort(
            items in items_strategy(),
            text in "[a-dA-D]{1,2}",
            direction in direction_strategy(),
        ) {
            let mut filtered_first = filter_records(&items, "name", &text);
            sort_records(&mut filtered_first, "rank", direction);

            let mut sorted: Vec<&Item> = items.iter().collect();
            sort_records(&mut sorted, "rank", direction);
            let sorted_first = filter_records(sorted, "name", &text);

            prop_assert_eq!(
                filtered_first.iter().map(|r| r.id).collect::<Vec<_>>(),
                sorted_first.iter().map(|r| r.id).collect::<Vec<_>>()
            );
        }

        /// An unknown field matches nothing once there is filter text
        #[test]
        fn unknown_field_matches_nothing(items in items_strategy(), text in "[a-d]{1,3}") {
            prop_assert!(filter_records(&items, "missing", &text).is_empty());
        }
    }
}

// =============================================================================
// PAGINATION PROPERTY TESTS
// =============================================================================

mod paginate_properties {
    use super::*;

    proptest! {
        /// Walking every page reproduces the whole view
        #[test]
        fn pages_cover_the_view(total in 0usize..60, size in page_size_strategy()) {
            let items: Vec<usize> = (0..total).collect();
            let pages = total.div_ceil(size.get());

            let mut seen = Vec::new();
            for page in 0..pages {
                let (slice, window) = paginate(&items, page, size);
                prop_assert!(!slice.is_empty());
                prop_assert!(slice.len() <= size.get());
                prop_assert_eq!(window.page_count(), pages);
                seen.extend_from_slice(slice);
            }
            prop_assert_eq!(seen, items);
        }

        /// Padding appears on the last page only and tops it up to full height
        #[test]
        fn padding_only_on_last_page(total in 0usize..60, size in page_size_strategy(), page in 0usize..20) {
            let window = PageWindow::new(total, page, size);

            if window.is_last_page() {
                prop_assert_eq!(window.visible_len() + window.empty_rows, size.get().min(total));
            } else {
                prop_assert_eq!(window.empty_rows, 0);
            }
        }

        /// Pages past the end are empty and unpadded
        #[test]
        fn past_the_end_is_empty(total in 0usize..60, size in page_size_strategy(), extra in 0usize..5) {
            let page = total.div_ceil(size.get()) + extra;
            let window = PageWindow::new(total, page, size);
            prop_assert_eq!(window.visible_len(), 0);
            prop_assert_eq!(window.empty_rows, 0);
        }
    }
}

// =============================================================================
// SELECTION PROPERTY TESTS
// =============================================================================

mod selection_properties {
    use super::*;

    proptest! {
        /// Toggling an id twice restores the selection
        #[test]
        fn toggle_one_is_an_involution(start in ids_strategy(), id in 0i64..20) {
            let mut selection: SelectionSet = start.into_iter().collect();
            let before: HashSet<RecordId> = selection.iter().cloned().collect();

            let now_selected = selection.toggle_one(RecordId::from(id));
            prop_assert_eq!(now_selected, selection.is_selected(&RecordId::from(id)));
            selection.toggle_one(RecordId::from(id));

            let after: HashSet<RecordId> = selection.iter().cloned().collect();
            prop_assert_eq!(before, after);
        }

        /// Select-all never touches ids outside the view
        #[test]
        fn toggle_all_is_scoped(start in ids_strategy(), view in ids_strategy()) {
            let mut selection: SelectionSet = start.iter().cloned().collect();
            let view_set: HashSet<RecordId> = view.iter().cloned().collect();

            let result = selection.toggle_all(view.clone());

            for id in &start {
                if !view_set.contains(id) {
                    prop_assert!(selection.is_selected(id));
                }
            }
            prop_assert_eq!(result, SelectAllState::of(&selection, &view));
            if !view.is_empty() {
                prop_assert_ne!(result, SelectAllState::Partial);
            }
        }

        /// After select-all the view is uniformly selected or deselected
        #[test]
        fn toggle_all_twice_clears_the_view(start in ids_strategy(), view in ids_strategy()) {
            let mut selection: SelectionSet = start.into_iter().collect();
            selection.toggle_all(view.clone());
            let second = selection.toggle_all(view.clone());

            if view.is_empty() {
                prop_assert_eq!(second, SelectAllState::None);
            } else if second == SelectAllState::None {
                prop_assert!(view.iter().all(|id| !selection.is_selected(id)));
            } else {
                prop_assert!(view.iter().all(|id| selection.is_selected(id)));
            }
        }
    }
}
