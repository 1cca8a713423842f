//! Catalog list orchestration
//!
//! [`CatalogList`] owns the search and selection state. Given the catalog (or
//! `None` while it is still loading) it produces a [`CatalogView`]: the status
//! line, one preview per visible package in catalog order, and the detail
//! surface bound to the current selection.

use super::detail::DetailView;
use super::listener::CatalogListener;
use super::preview::PackagePreview;
use super::state::{CatalogEvent, SelectionState, ViewState};
use crate::catalog::VersionCatalog;
use crate::search::{MatchPolicy, SearchResult, filter_names};

/// What the catalog view shows right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView<'a> {
    /// Catalog not available yet; show a placeholder and no grid
    Loading,
    /// Catalog available
    Ready(ReadyView<'a>),
}

impl<'a> CatalogView<'a> {
    /// The ready view, if the catalog has arrived
    #[must_use]
    pub const fn ready(&self) -> Option<&ReadyView<'a>> {
        match self {
            Self::Loading => None,
            Self::Ready(ready) => Some(ready),
        }
    }
}

/// Contents of the view once the catalog is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyView<'a> {
    /// Filter outcome and counts
    pub search: SearchResult,
    /// One card per visible package, in visible order
    pub previews: Vec<PackagePreview<'a>>,
    /// Detail surface for the current selection
    pub detail: DetailView<'a>,
}

/// Owner of the catalog view state
#[derive(Debug, Clone, Default)]
pub struct CatalogList {
    state: ViewState,
    policy: MatchPolicy,
}

impl CatalogList {
    /// Create a list with empty query and nothing selected
    #[must_use]
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            state: ViewState::default(),
            policy,
        }
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.search.query
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    /// Whether the detail surface is open
    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.state.selection.detail_open
    }

    /// Match policy used for filtering
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Change the match policy
    pub fn set_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    /// Apply one state event
    pub fn apply(&mut self, event: CatalogEvent) {
        tracing::debug!(?event, "catalog event");
        self.state.apply(event);
    }

    /// Filter the catalog's names by the current query
    #[must_use]
    pub fn search(&self, catalog: &VersionCatalog) -> SearchResult {
        filter_names(self.query(), catalog.names(), self.policy)
    }

    /// Build the view for `catalog`
    ///
    /// `None` means the catalog has not been loaded yet.
    #[must_use]
    pub fn view<'a>(&self, catalog: Option<&'a VersionCatalog>) -> CatalogView<'a> {
        let Some(catalog) = catalog else {
            return CatalogView::Loading;
        };

        CatalogView::Ready(self.ready_view(catalog, self.search(catalog)))
    }

    /// Build the ready view around an already computed `search`
    ///
    /// `search` must come from [`search`](Self::search) over the same catalog
    /// and query. No filtering happens here.
    #[must_use]
    pub fn ready_view<'a>(
        &self,
        catalog: &'a VersionCatalog,
        search: SearchResult,
    ) -> ReadyView<'a> {
        let previews = search
            .visible_names
            .iter()
            .filter_map(|name| catalog.get_key_value(name))
            .map(|(name, entry)| PackagePreview::new(name, entry))
            .collect();
        let detail = DetailView::bind(&self.state.selection, catalog);

        ReadyView {
            search,
            previews,
            detail,
        }
    }
}

impl CatalogListener for CatalogList {
    fn on_detail_requested(&mut self, name: &str) {
        self.apply(CatalogEvent::DetailRequested(name.to_string()));
    }

    fn on_detail_closed(&mut self) {
        self.apply(CatalogEvent::DetailClosed);
    }

    fn on_query_changed(&mut self, query: &str) {
        self.apply(CatalogEvent::QueryChanged(query.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PackageEntry, VersionRecord};

    fn entry(count: usize) -> PackageEntry {
        PackageEntry::new(
            (0..count)
                .map(|i| VersionRecord::new(format!("1.{i}"), vec![format!("v0.{i}.0")]))
                .collect(),
        )
    }

    fn catalog() -> VersionCatalog {
        vec![
            ("left-pad", entry(3)),
            ("react", entry(2)),
            ("redux", entry(1)),
        ]
        .into_iter()
        .collect()
    }

    fn preview_names<'a>(view: &'a CatalogView<'_>) -> Vec<&'a str> {
        view.ready()
            .unwrap()
            .previews
            .iter()
            .map(PackagePreview::name)
            .collect()
    }

    #[test]
    fn test_loading_without_catalog() {
        let list = CatalogList::default();
        assert_eq!(list.view(None), CatalogView::Loading);
    }

    #[test]
    fn test_ready_view_follows_query() {
        let catalog = catalog();
        let mut list = CatalogList::new(MatchPolicy::Insensitive);

        let view = list.view(Some(&catalog));
        assert_eq!(preview_names(&view), vec!["left-pad", "react", "redux"]);
        assert_eq!(view.ready().unwrap().search.status_text(), "3 packages found.");

        list.on_query_changed("re");
        let view = list.view(Some(&catalog));
        assert_eq!(preview_names(&view), vec!["react", "redux"]);
        assert_eq!(
            view.ready().unwrap().search.status_text(),
            "2 results found from 3 packages."
        );
    }

    #[test]
    fn test_more_opens_detail_with_all_records() {
        let catalog = catalog();
        let mut list = CatalogList::default();

        let view = list.view(Some(&catalog));
        let left_pad = view.ready().unwrap().previews[0];
        assert_eq!(left_pad.more_label().as_deref(), Some("And 1 more..."));
        assert!(left_pad.request_detail(&mut list));

        assert_eq!(list.selection().selected_name.as_deref(), Some("left-pad"));
        assert!(list.is_detail_open());

        let view = list.view(Some(&catalog));
        let detail = view.ready().unwrap().detail;
        assert!(detail.is_visible());
        assert_eq!(detail.records().len(), 3);
        assert_eq!(detail.records()[2].original, "1.2");
    }

    #[test]
    fn test_close_keeps_selected_name() {
        let catalog = catalog();
        let mut list = CatalogList::default();
        list.on_detail_requested("left-pad");

        let view = list.view(Some(&catalog));
        view.ready().unwrap().detail.close(&mut list);

        assert!(!list.is_detail_open());
        assert_eq!(list.selection().selected_name.as_deref(), Some("left-pad"));
        assert!(!list.view(Some(&catalog)).ready().unwrap().detail.is_visible());
    }

    #[test]
    fn test_detail_survives_filtering_it_out() {
        let catalog = catalog();
        let mut list = CatalogList::default();
        list.on_detail_requested("left-pad");
        list.on_query_changed("redux");

        let view = list.view(Some(&catalog));
        assert_eq!(preview_names(&view), vec!["redux"]);
        assert_eq!(view.ready().unwrap().detail.name(), Some("left-pad"));
    }

    #[test]
    fn test_policy_switch() {
        let catalog: VersionCatalog = vec![("React", entry(1))].into_iter().collect();
        let mut list = CatalogList::new(MatchPolicy::Sensitive);
        list.on_query_changed("re");
        assert!(list.search(&catalog).visible_names.is_empty());

        list.set_policy(MatchPolicy::Insensitive);
        assert_eq!(list.search(&catalog).visible_names, vec!["React"]);
    }
}
