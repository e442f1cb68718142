//! Browse session management
//!
//! A `BrowseSession` ties one list screen together: the data source it
//! fetches from, the credentials it fetches with, the screen settings, the
//! current snapshot and the view state. The presentation layer drives it
//! through the `ViewState` entry points and asks for a fresh
//! [`BrowseView`] after each input event.
//!
//! # Workflow
//!
//! ```text
//! Session Created (snapshot fetched)
//!     ↓
//! ┌─→ view() → render page, padding, selection
//! │       ↓
//! │   Input event?
//! │   ├─ sort/filter/page → state_mut() entry point → Loop
//! │   ├─ toggle row / select all → selection updated → Loop
//! │   └─ mutation elsewhere → refresh() → re-fetch, reconcile → Loop
//! ```

use super::error::Result;
use super::models::{Browsable, SortDirection};
use super::paginate::PageSize;
use super::query::{BrowseView, query};
use super::selection::SelectAllState;
use super::state::ViewState;
use crate::records::Resource;
use crate::source::{Credentials, DataSource};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::debug;

/// Per-screen settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSettings {
    /// Field the search box matches against
    pub filter_field: String,

    /// Initial sort column, empty for collection order
    pub sort_key: String,

    /// Initial sort direction
    pub sort_direction: SortDirection,

    /// Initial rows per page
    pub page_size: PageSize,
}

impl ScreenSettings {
    /// Built-in settings of a resource's list screen
    #[must_use]
    pub fn for_resource(resource: Resource) -> Self {
        Self {
            filter_field: resource.default_filter_field().to_string(),
            sort_key: resource.default_sort_key().to_string(),
            sort_direction: SortDirection::Ascending,
            page_size: PageSize::DEFAULT,
        }
    }
}

/// One list screen over one resource
pub struct BrowseSession<'a, S: ?Sized, R> {
    source: &'a S,
    credentials: Credentials,
    settings: ScreenSettings,
    state: ViewState,
    records: Vec<R>,
}

impl<'a, S, R> BrowseSession<'a, S, R>
where
    S: DataSource + ?Sized,
    R: Browsable + DeserializeOwned,
{
    /// Create a session and fetch its first snapshot
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Source` if the fetch fails.
    pub fn new(source: &'a S, credentials: Credentials, settings: ScreenSettings) -> Result<Self> {
        let records = source.fetch::<R>(&credentials)?;
        let state = ViewState::new(settings.page_size)
            .with_sort(&settings.sort_key, settings.sort_direction);

        Ok(Self {
            source,
            credentials,
            settings,
            state,
            records,
        })
    }

    /// Run the current view state over the snapshot
    #[must_use]
    pub fn view(&self) -> BrowseView<'_, R> {
        query(&self.records, &self.state, &self.settings.filter_field)
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// View state entry points for the presentation layer
    pub const fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    #[must_use]
    pub const fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    /// The current snapshot in collection order
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Select-all over the current filtered view
    pub fn toggle_all(&mut self) -> SelectAllState {
        let ids = self.view().ids();
        self.state.toggle_all(ids)
    }

    /// Selected records present in the snapshot, in collection order
    #[must_use]
    pub fn selected_records(&self) -> Vec<&R> {
        let selection = self.state.selection();
        self.records
            .iter()
            .filter(|r| selection.is_selected(&r.record_id()))
            .collect()
    }

    /// Re-fetch the snapshot and drop selected ids that no longer exist
    ///
    /// View state other than the selection is kept as is. Returns the number
    /// of selected ids that were dropped. On error the old snapshot stays.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Source` if the fetch fails.
    pub fn refresh(&mut self) -> Result<usize> {
        let records = self.source.fetch::<R>(&self.credentials)?;
        let live: HashSet<_> = records.iter().map(R::record_id).collect();

        self.records = records;
        let dropped = self.state.reconcile_selection(&live);
        debug!(
            resource = %R::RESOURCE,
            count = self.records.len(),
            dropped,
            "refreshed snapshot"
        );
        Ok(dropped)
    }
}
