//! Name matching policies

use clap::ValueEnum;
use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a query is matched against package names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Substring match ignoring case
    #[default]
    Insensitive,
    /// Exact-case substring match
    Sensitive,
    /// Fuzzy subsequence match (nucleo scoring, order still follows the catalog)
    Fuzzy,
}

impl MatchPolicy {
    /// Lowercase name used in config files and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Insensitive => "insensitive",
            Self::Sensitive => "sensitive",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a query narrows the catalog at all
///
/// Whitespace-only queries show every package.
#[must_use]
pub fn is_active_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// A query compiled for one policy
///
/// Build once per query and reuse across every name.
pub struct NameMatcher {
    kind: MatcherKind,
}

enum MatcherKind {
    All,
    Sensitive(String),
    Insensitive(String),
    Fuzzy {
        atom: Atom,
        matcher: Box<Matcher>,
        buf: Vec<char>,
    },
}

impl NameMatcher {
    /// Compile `query` under `policy`
    #[must_use]
    pub fn new(query: &str, policy: MatchPolicy) -> Self {
        let kind = if !is_active_query(query) {
            MatcherKind::All
        } else {
            match policy {
                MatchPolicy::Sensitive => MatcherKind::Sensitive(query.to_string()),
                MatchPolicy::Insensitive => MatcherKind::Insensitive(query.to_lowercase()),
                MatchPolicy::Fuzzy => MatcherKind::Fuzzy {
                    atom: Atom::new(
                        query.trim(),
                        CaseMatching::Smart,
                        Normalization::Never,
                        AtomKind::Fuzzy,
                        false,
                    ),
                    matcher: Box::new(Matcher::new(Config::DEFAULT)),
                    buf: Vec::new(),
                },
            }
        };
        Self { kind }
    }

    /// Whether `name` matches the compiled query
    pub fn is_match(&mut self, name: &str) -> bool {
        match &mut self.kind {
            MatcherKind::All => true,
            MatcherKind::Sensitive(needle) => name.contains(needle.as_str()),
            MatcherKind::Insensitive(needle) => name.to_lowercase().contains(needle.as_str()),
            MatcherKind::Fuzzy { atom, matcher, buf } => atom
                .score(Utf32Str::new(name, buf), matcher)
                .is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_everything() {
        for policy in [MatchPolicy::Insensitive, MatchPolicy::Sensitive, MatchPolicy::Fuzzy] {
            let mut m = NameMatcher::new("   ", policy);
            assert!(m.is_match("anything"));
            assert!(m.is_match(""));
        }
    }

    #[test]
    fn test_insensitive_ignores_case() {
        let mut m = NameMatcher::new("RE", MatchPolicy::Insensitive);
        assert!(m.is_match("react"));
        assert!(m.is_match("Redux"));
        assert!(!m.is_match("left-pad"));
    }

    #[test]
    fn test_sensitive_respects_case() {
        let mut m = NameMatcher::new("Re", MatchPolicy::Sensitive);
        assert!(m.is_match("Redux"));
        assert!(!m.is_match("react"));
    }

    #[test]
    fn test_query_is_not_trimmed_for_substring() {
        let mut m = NameMatcher::new("left ", MatchPolicy::Insensitive);
        assert!(!m.is_match("left-pad"));
        assert!(m.is_match("left pad"));
    }

    #[test]
    fn test_fuzzy_matches_subsequence() {
        let mut m = NameMatcher::new("lpd", MatchPolicy::Fuzzy);
        assert!(m.is_match("left-pad"));
        assert!(!m.is_match("react"));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::Insensitive);
        assert_eq!(MatchPolicy::Fuzzy.to_string(), "fuzzy");
    }
}
