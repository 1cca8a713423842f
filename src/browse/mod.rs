//! Browse module - package list, preview cards and detail surface
//!
//! This module holds the browsing logic independent of any front end. The
//! terminal UI and the plain-text commands both render the same
//! [`CatalogView`].
//!
//! # Architecture
//!
//! - `state`: search/selection state and the event reducer
//! - `listener`: the intent interface components report to
//! - `preview`: the two-record card and its "more" affordance
//! - `detail`: the full version list of the selected package
//! - `list`: the orchestrator that owns the state and builds views

pub mod detail;
pub mod list;
pub mod listener;
pub mod preview;
pub mod state;

pub use detail::DetailView;
pub use list::{CatalogList, CatalogView, ReadyView};
pub use listener::CatalogListener;
pub use preview::{PREVIEW_LIMIT, PackagePreview};
pub use state::{CatalogEvent, SearchState, SelectionState, ViewState};
