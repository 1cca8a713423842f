//! Result count status line
//!
//! With an active query: "`N` results found from `T` packages."
//! Without one: "`T` packages found."
//! A zero count is written as "No" in both forms.

use super::policy::is_active_query;

/// One piece of the status line
///
/// Counts are flagged so front ends can emphasise them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPart {
    /// Text of the piece
    pub text: String,
    /// Whether the piece is a count
    pub emphasis: bool,
}

impl StatusPart {
    fn count(n: usize) -> Self {
        if n == 0 {
            Self::plain("No")
        } else {
            Self {
                text: n.to_string(),
                emphasis: true,
            }
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasis: false,
        }
    }
}

/// Status line split into emphasised counts and plain text
#[must_use]
pub fn status_parts(query: &str, result_count: usize, total_count: usize) -> Vec<StatusPart> {
    if is_active_query(query) {
        vec![
            StatusPart::count(result_count),
            StatusPart::plain(" results found from "),
            StatusPart::count(total_count),
            StatusPart::plain(" packages."),
        ]
    } else {
        vec![
            StatusPart::count(total_count),
            StatusPart::plain(" packages found."),
        ]
    }
}

/// Status line as plain text
#[must_use]
pub fn status_text(query: &str, result_count: usize, total_count: usize) -> String {
    status_parts(query, result_count, total_count)
        .into_iter()
        .map(|part| part.text)
        .collect()
}
