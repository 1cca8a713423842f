//! Truncated preview of one package
//!
//! A card shows the first [`PREVIEW_LIMIT`] version records. When more exist
//! it offers an "And N more..." affordance that asks the owner to open the
//! detail surface for the package.

use super::listener::CatalogListener;
use crate::catalog::{PackageEntry, VersionRecord};

/// Number of version records shown on a card
pub const PREVIEW_LIMIT: usize = 2;

/// Preview of one package's version records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagePreview<'a> {
    name: &'a str,
    entry: &'a PackageEntry,
}

impl<'a> PackagePreview<'a> {
    /// Create a preview for `name`
    #[must_use]
    pub const fn new(name: &'a str, entry: &'a PackageEntry) -> Self {
        Self { name, entry }
    }

    /// Package name
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Records shown on the card: at most the first two
    #[must_use]
    pub fn rows(&self) -> &'a [VersionRecord] {
        let shown = self.entry.versions.len().min(PREVIEW_LIMIT);
        &self.entry.versions[..shown]
    }

    /// Total number of records the package has
    #[must_use]
    pub fn total_versions(&self) -> usize {
        self.entry.versions.len()
    }

    /// Records hidden from the card
    ///
    /// Packages with two or fewer records have nothing remaining.
    #[must_use]
    pub fn remain(&self) -> usize {
        self.total_versions().saturating_sub(PREVIEW_LIMIT)
    }

    /// Whether the card offers the "more" affordance
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remain() > 0
    }

    /// Label of the "more" affordance, if the card has one
    #[must_use]
    pub fn more_label(&self) -> Option<String> {
        self.has_more()
            .then(|| format!("And {} more...", self.remain()))
    }

    /// Activate the "more" affordance
    ///
    /// Notifies `listener` and returns `true` when the card has hidden
    /// records; otherwise does nothing and returns `false`.
    pub fn request_detail<L: CatalogListener + ?Sized>(&self, listener: &mut L) -> bool {
        if !self.has_more() {
            return false;
        }
        listener.on_detail_requested(self.name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        requested: Vec<String>,
    }

    impl CatalogListener for Recorder {
        fn on_detail_requested(&mut self, name: &str) {
            self.requested.push(name.to_string());
        }
        fn on_detail_closed(&mut self) {}
        fn on_query_changed(&mut self, _query: &str) {}
    }

    fn entry(count: usize) -> PackageEntry {
        PackageEntry::new(
            (0..count)
                .map(|i| VersionRecord::new(format!("1.{i}.0"), vec![format!("v0.{i}.0")]))
                .collect(),
        )
    }

    #[test]
    fn test_three_records_show_two_and_affordance() {
        let e = entry(3);
        let preview = PackagePreview::new("left-pad", &e);
        assert_eq!(preview.rows().len(), 2);
        assert_eq!(preview.rows()[0].original, "1.0.0");
        assert_eq!(preview.rows()[1].original, "1.1.0");
        assert_eq!(preview.more_label().as_deref(), Some("And 1 more..."));
    }

    #[test]
    fn test_single_record_has_no_affordance() {
        let e = entry(1);
        let preview = PackagePreview::new("tiny", &e);
        assert_eq!(preview.rows().len(), 1);
        assert!(!preview.has_more());
        assert_eq!(preview.more_label(), None);
    }

    #[test]
    fn test_exactly_two_records() {
        let e = entry(2);
        let preview = PackagePreview::new("pair", &e);
        assert_eq!(preview.rows().len(), 2);
        assert_eq!(preview.remain(), 0);
        assert!(preview.more_label().is_none());
    }

    #[test]
    fn test_no_records() {
        let e = entry(0);
        let preview = PackagePreview::new("empty", &e);
        assert!(preview.rows().is_empty());
        assert!(!preview.has_more());
    }

    #[test]
    fn test_request_detail_notifies_only_with_more() {
        let mut recorder = Recorder::default();
        let many = entry(5);
        let few = entry(2);

        assert!(PackagePreview::new("many", &many).request_detail(&mut recorder));
        assert!(!PackagePreview::new("few", &few).request_detail(&mut recorder));
        assert_eq!(recorder.requested, vec!["many"]);
    }
}
