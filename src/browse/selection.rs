//! Toggle-based multi-row selection
//!
//! Selection lives independently of pagination and of the current filter:
//! changing either never drops a selected id. Only the caller removes ids,
//! either explicitly or through [`SelectionSet::retain_ids`] after a re-fetch.

use super::models::RecordId;
use std::collections::HashSet;

/// Set of selected record ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

/// Summary of how much of a view is selected
///
/// Drives a header checkbox: checked for `All`, indeterminate for `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Partial,
    All,
}

impl SelectAllState {
    /// Classify a view against a selection
    ///
    /// An empty view is always `None`.
    pub fn of<'a, I>(selection: &SelectionSet, view_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let (mut total, mut selected) = (0usize, 0usize);
        for id in view_ids {
            total += 1;
            if selection.is_selected(id) {
                selected += 1;
            }
        }

        match selected {
            0 => Self::None,
            n if n == total => Self::All,
            _ => Self::Partial,
        }
    }

    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::None => "[ ]",
            Self::Partial => "[-]",
            Self::All => "[x]",
        }
    }
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id. Returns `true` if the id is selected afterwards.
    pub fn toggle_one(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Select-all over the current filtered view
    ///
    /// If every id in the view is already selected they are all deselected,
    /// otherwise every id in the view becomes selected. Ids outside the view
    /// are left alone, and an empty view changes nothing.
    ///
    /// Returns the view's state after the toggle.
    pub fn toggle_all<I>(&mut self, view_ids: I) -> SelectAllState
    where
        I: IntoIterator<Item = RecordId>,
    {
        let view: Vec<RecordId> = view_ids.into_iter().collect();
        if view.is_empty() {
            return SelectAllState::None;
        }

        if view.iter().all(|id| self.ids.contains(id)) {
            for id in &view {
                self.ids.remove(id);
            }
            SelectAllState::None
        } else {
            self.ids.extend(view);
            SelectAllState::All
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every selected id that is not in `live`
    ///
    /// Returns the number of ids removed.
    pub fn retain_ids(&mut self, live: &HashSet<RecordId>) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| live.contains(id));
        before - self.ids.len()
    }

    /// Selected ids in a stable order for display
    ///
    /// Ids that look like integers sort numerically, everything else sorts
    /// after them as text.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<&RecordId> {
        let mut ids: Vec<&RecordId> = self.ids.iter().collect();
        ids.sort_by(|a, b| {
            match (a.as_str().parse::<i64>(), b.as_str().parse::<i64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            }
        });
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = RecordId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
