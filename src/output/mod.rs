//! Output formatting for CLI display
//!
//! Plain-text renderings of the catalog view used by the `list` and `show`
//! commands. With `color` set, names, counts and affordances are styled;
//! `colored` drops the styling on its own when stdout is not a terminal.

use crate::browse::{DetailView, PackagePreview};
use crate::catalog::VersionRecord;
use crate::search::{SearchResult, status_parts};
use colored::Colorize;

/// Width of the original-version column
pub const ORIGINAL_COLUMN_WIDTH: usize = 12;

/// Format the result count line
#[must_use]
pub fn format_status(search: &SearchResult, color: bool) -> String {
    status_parts(&search.query, search.result_count, search.total_count)
        .into_iter()
        .map(|part| {
            if color && part.emphasis {
                part.text.blue().bold().to_string()
            } else {
                part.text
            }
        })
        .collect()
}

/// Format one version record as an indented row
#[must_use]
pub fn format_record(record: &VersionRecord, color: bool) -> String {
    let original = format!("{:<width$}", record.original, width = ORIGINAL_COLUMN_WIDTH);
    let original = if color {
        original.bold().to_string()
    } else {
        original
    };
    format!("  {original} {}", record.converted_display())
}

/// Format a package card: name, up to two rows, optional "more" line
#[must_use]
pub fn format_preview(preview: &PackagePreview<'_>, color: bool) -> Vec<String> {
    let name = if color {
        preview.name().bold().to_string()
    } else {
        preview.name().to_string()
    };

    let mut lines = vec![name];
    lines.extend(preview.rows().iter().map(|r| format_record(r, color)));
    if let Some(label) = preview.more_label() {
        let label = if color {
            label.cyan().to_string()
        } else {
            label
        };
        lines.push(format!("  {label}"));
    }
    lines
}

/// Format the detail surface; nothing when it is hidden
#[must_use]
pub fn format_detail(detail: &DetailView<'_>, color: bool) -> Vec<String> {
    let Some(name) = detail.name() else {
        return Vec::new();
    };

    let count = detail.records().len();
    let noun = if count == 1 { "version" } else { "versions" };
    let mut header = format!("{name} ({count} {noun}");
    if let Some(latest) = detail.latest_converted() {
        header.push_str(&format!(", latest {latest}"));
    }
    header.push(')');

    let header = if color {
        header.bold().to_string()
    } else {
        header
    };

    let mut lines = vec![header];
    lines.extend(detail.records().iter().map(|r| format_record(r, color)));
    lines
}
