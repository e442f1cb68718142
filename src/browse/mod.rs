//! Browse module - the tabular data browser engine
//!
//! This module provides sorting, filtering, pagination and selection over an
//! in-memory record snapshot. It is UI-agnostic: the CLI table printer and
//! the interactive shell both drive the same engine through [`ViewState`]
//! and read back a [`BrowseView`].
//!
//! # Architecture
//!
//! - `models`: Core data types (`Browsable`, `FieldValue`, `RecordId`, ...)
//! - `sort`: Stable single-key comparator
//! - `filter`: Case-insensitive substring filter
//! - `paginate`: Page windows with empty-row padding
//! - `selection`: Toggle-based selection set
//! - `state`: Mutable view state with page-reset rules
//! - `query`: Filter, sort and paginate in one pass
//! - `session`: A screen bound to a data source
//!
//! Everything except `session` is pure and works on borrowed snapshots.

pub mod error;
pub mod filter;
pub mod models;
pub mod paginate;
pub mod query;
pub mod selection;
pub mod session;
pub mod sort;
pub mod state;

pub use error::BrowseError;
pub use filter::{TextFilter, filter_records};
pub use models::{Browsable, Column, FieldValue, RecordId, SortDirection, normalize_field_name};
pub use paginate::{PageSize, PageWindow, paginate};
pub use query::{BrowseView, query};
pub use selection::{SelectAllState, SelectionSet};
pub use session::{BrowseSession, ScreenSettings};
pub use sort::{compare, sort_records};
pub use state::ViewState;
