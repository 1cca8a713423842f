//! Property tests for filtering, previews and the view reducer

use proptest::prelude::*;
use vermap::browse::{CatalogEvent, PREVIEW_LIMIT, PackagePreview, ViewState};
use vermap::catalog::{PackageEntry, VersionCatalog, VersionRecord};
use vermap::search::{MatchPolicy, filter_names, is_active_query};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,9}"
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..16)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9-]{1,3}",
        " {0,2}",
        Just(String::new()),
    ]
}

fn substring_policy() -> impl Strategy<Value = MatchPolicy> {
    prop_oneof![Just(MatchPolicy::Insensitive), Just(MatchPolicy::Sensitive)]
}

fn event_strategy() -> impl Strategy<Value = CatalogEvent> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(CatalogEvent::DetailRequested),
        Just(CatalogEvent::DetailClosed),
        "[a-z ]{0,3}".prop_map(CatalogEvent::QueryChanged),
    ]
}

fn contains_query(name: &str, query: &str, policy: MatchPolicy) -> bool {
    match policy {
        MatchPolicy::Sensitive => name.contains(query),
        _ => name.to_lowercase().contains(&query.to_lowercase()),
    }
}

/// Whether `sub` appears in `all` in the same relative order
fn is_subsequence(sub: &[String], all: &[&str]) -> bool {
    let mut rest = all.iter();
    sub.iter().all(|name| rest.any(|candidate| *candidate == name.as_str()))
}

fn entry(count: usize) -> PackageEntry {
    PackageEntry::new(
        (0..count)
            .map(|i| VersionRecord::new(format!("1.{i}.0"), vec![format!("v0.{i}.0")]))
            .collect(),
    )
}

proptest! {
    /// Property: visible names keep catalog order and come from the catalog
    #[test]
    fn prop_visible_is_ordered_subsequence(
        names in names_strategy(),
        query in query_strategy(),
        policy in prop_oneof![
            Just(MatchPolicy::Insensitive),
            Just(MatchPolicy::Sensitive),
            Just(MatchPolicy::Fuzzy),
        ],
    ) {
        let all: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = filter_names(&query, all.iter().copied(), policy);

        prop_assert!(is_subsequence(&result.visible_names, &all));
        prop_assert_eq!(result.result_count, result.visible_names.len());
        prop_assert_eq!(result.total_count, all.len());
    }

    /// Property: a blank query shows every name
    #[test]
    fn prop_blank_query_shows_all(names in names_strategy(), query in " {0,3}") {
        let all: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = filter_names(&query, all.iter().copied(), MatchPolicy::Insensitive);

        prop_assert!(!is_active_query(&query));
        prop_assert_eq!(result.visible_names, names.clone());
        prop_assert_eq!(result.result_count, names.len());
    }

    /// Property: a name is visible exactly when it contains the query
    #[test]
    fn prop_visible_iff_contains(
        names in names_strategy(),
        query in "[a-zA-Z0-9-]{1,3}",
        policy in substring_policy(),
    ) {
        let all: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = filter_names(&query, all.iter().copied(), policy);

        for name in &all {
            let visible = result.visible_names.iter().any(|v| v == name);
            prop_assert_eq!(visible, contains_query(name, &query, policy));
        }
    }

    /// Property: filtering is a pure function of query and names
    #[test]
    fn prop_filter_is_deterministic(names in names_strategy(), query in query_strategy()) {
        let all: Vec<&str> = names.iter().map(String::as_str).collect();
        let first = filter_names(&query, all.iter().copied(), MatchPolicy::Insensitive);
        let second = filter_names(&query, all.iter().copied(), MatchPolicy::Insensitive);
        prop_assert_eq!(first, second);
    }

    /// Property: a card shows min(len, 2) rows and offers "more" iff len > 2
    #[test]
    fn prop_preview_truncation(count in 0usize..8) {
        let entry = entry(count);
        let preview = PackagePreview::new("pkg", &entry);

        prop_assert_eq!(preview.rows().len(), count.min(PREVIEW_LIMIT));
        prop_assert_eq!(preview.rows(), &entry.versions[..count.min(PREVIEW_LIMIT)]);
        prop_assert_eq!(preview.has_more(), count > PREVIEW_LIMIT);
        prop_assert_eq!(preview.remain(), count.saturating_sub(PREVIEW_LIMIT));
        prop_assert_eq!(preview.more_label().is_some(), count > PREVIEW_LIMIT);
    }

    /// Property: catalog order follows insertion order of distinct names
    #[test]
    fn prop_catalog_keeps_first_position(names in names_strategy()) {
        let catalog: VersionCatalog = names.iter().map(|n| (n.clone(), entry(1))).collect();

        let mut expected: Vec<&str> = Vec::new();
        for name in &names {
            if !expected.contains(&name.as_str()) {
                expected.push(name);
            }
        }
        prop_assert_eq!(catalog.names().collect::<Vec<_>>(), expected);
    }

    /// Property: the reducer matches a simple model over any event sequence
    #[test]
    fn prop_reducer_follows_model(events in prop::collection::vec(event_strategy(), 0..32)) {
        let mut state = ViewState::default();
        let mut selected: Option<String> = None;
        let mut open = false;
        let mut query = String::new();

        for event in events {
            let before = state.selection.clone();
            match &event {
                CatalogEvent::DetailRequested(name) => {
                    selected = Some(name.clone());
                    open = true;
                }
                CatalogEvent::DetailClosed => open = false,
                CatalogEvent::QueryChanged(q) => query = q.clone(),
            }
            let is_query = matches!(event, CatalogEvent::QueryChanged(_));
            state.apply(event);

            if is_query {
                prop_assert_eq!(&state.selection, &before);
            }
            prop_assert_eq!(&state.selection.selected_name, &selected);
            prop_assert_eq!(state.selection.detail_open, open);
            prop_assert_eq!(&state.search.query, &query);
        }
    }
}
