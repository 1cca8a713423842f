//! View state and its reducer
//!
//! Search and selection state are owned by [`CatalogList`](super::CatalogList)
//! and change only through [`ViewState::apply`].
//!
//! Selection transitions:
//!
//! ```text
//!  DetailRequested(X)  -> selected_name = Some(X), detail_open = true
//!  DetailClosed        -> detail_open = false (selected_name kept)
//! ```

/// Current search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw query text
    pub query: String,
}

/// Which package the detail surface shows, and whether it is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Last package whose detail was requested
    pub selected_name: Option<String>,
    /// Whether the detail surface is shown
    pub detail_open: bool,
}

/// Events accepted by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Open the detail surface for a package
    DetailRequested(String),
    /// Hide the detail surface
    DetailClosed,
    /// Replace the search query
    QueryChanged(String),
}

/// All mutable state of a catalog view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Search input
    pub search: SearchState,
    /// Detail selection
    pub selection: SelectionState,
}

impl ViewState {
    /// Apply one event
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::DetailRequested(name) => {
                self.selection.selected_name = Some(name);
                self.selection.detail_open = true;
            }
            CatalogEvent::DetailClosed => {
                self.selection.detail_open = false;
            }
            CatalogEvent::QueryChanged(query) => {
                self.search.query = query;
            }
        }
    }
}
