//! Package name filtering
//!
//! Reduces a query and the full, ordered list of package names to the visible
//! subsequence plus the counts the status line reports. Filtering is a pure
//! function of its inputs: the same query over the same names always yields
//! the same names in the same order.

use super::policy::{MatchPolicy, NameMatcher};
use super::status::status_text;

/// Outcome of filtering the package names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Query the result was computed for
    pub query: String,
    /// Matching names, in catalog order
    pub visible_names: Vec<String>,
    /// Number of matching names
    pub result_count: usize,
    /// Number of names searched
    pub total_count: usize,
}

impl SearchResult {
    /// Status line describing this result
    #[must_use]
    pub fn status_text(&self) -> String {
        status_text(&self.query, self.result_count, self.total_count)
    }
}

/// Filter `all_names` by `query`
///
/// A blank query (empty or whitespace only) keeps every name. Otherwise a name
/// is kept when it matches the query under `policy`.
pub fn filter_names<'a>(
    query: &str,
    all_names: impl IntoIterator<Item = &'a str>,
    policy: MatchPolicy,
) -> SearchResult {
    let mut matcher = NameMatcher::new(query, policy);
    let mut total_count = 0;
    let visible_names: Vec<String> = all_names
        .into_iter()
        .inspect(|_| total_count += 1)
        .filter(|name| matcher.is_match(name))
        .map(ToString::to_string)
        .collect();

    tracing::debug!(
        query,
        %policy,
        results = visible_names.len(),
        total = total_count,
        "filtered package names"
    );

    SearchResult {
        query: query.to_string(),
        result_count: visible_names.len(),
        visible_names,
        total_count,
    }
}
