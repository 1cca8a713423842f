//! Application state for the ratatui TUI
//!
//! Holds the catalog snapshot (once loaded), the [`CatalogList`] that owns
//! search and selection state, and the purely visual state around it: card
//! cursor, scroll offsets, the query editor and status messages.

use crate::browse::{CatalogList, CatalogListener, CatalogView, DetailView, PackagePreview};
use crate::catalog::VersionCatalog;
use crate::search::{MatchPolicy, SearchResult};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the catalog browser
#[derive(Debug)]
pub struct AppState {
    /// Catalog snapshot, `None` while loading
    pub catalog: Option<VersionCatalog>,
    /// Search and selection owner
    pub list: CatalogList,
    /// Filter result for the current query (recomputed on every change)
    pub search: Option<SearchResult>,
    /// Index of the card under the cursor
    pub cursor: usize,
    /// First card drawn
    pub scroll_offset: usize,
    /// Number of cards that fit on screen (set during render)
    pub visible_height: usize,
    /// Query being edited
    pub query: String,
    /// Cursor position within the query string
    pub query_cursor: usize,
    /// First record drawn in the detail surface
    pub detail_scroll: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create state with no catalog yet and an empty query
    #[must_use]
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            catalog: None,
            list: CatalogList::new(policy),
            search: None,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 5, // Default, updated during render
            query: String::new(),
            query_cursor: 0,
            detail_scroll: 0,
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Start with `query` already typed
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self.query_cursor = self.query.len();
        self.publish_query();
        self
    }

    /// Install the loaded catalog
    pub fn set_catalog(&mut self, catalog: VersionCatalog) {
        tracing::debug!(packages = catalog.len(), "catalog received by browser");
        self.catalog = Some(catalog);
        self.refresh();
    }

    /// View of the catalog for rendering
    ///
    /// Reuses the filter result cached by the last refresh.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        match (self.catalog.as_ref(), self.search.as_ref()) {
            (Some(catalog), Some(search)) => {
                CatalogView::Ready(self.list.ready_view(catalog, search.clone()))
            }
            _ => CatalogView::Loading,
        }
    }

    /// Whether the catalog is still loading
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    /// Hand the edited query to the list and refilter
    pub fn publish_query(&mut self) {
        self.list.on_query_changed(&self.query);
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh();
    }

    /// Recompute the filter result for the current query
    fn refresh(&mut self) {
        self.search = self.catalog.as_ref().map(|catalog| self.list.search(catalog));
        let max_cursor = self.visible_count().saturating_sub(1);
        if self.cursor > max_cursor {
            self.cursor = max_cursor;
        }
        self.adjust_scroll();
    }

    /// Number of visible cards
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.search
            .as_ref()
            .map_or(0, |search| search.visible_names.len())
    }

    /// Name of the card under the cursor
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.search
            .as_ref()
            .and_then(|search| search.visible_names.get(self.cursor))
            .map(String::as_str)
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.visible_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first card
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last card
    pub fn jump_to_end(&mut self) {
        self.cursor = self.visible_count().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Record how many cards fit on screen
    pub const fn set_visible_height(&mut self, cards: usize) {
        self.visible_height = if cards == 0 { 1 } else { cards };
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 {
            1
        } else {
            self.visible_height
        };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Activate the "more" affordance of the card under the cursor
    ///
    /// Returns `true` if the detail surface opened. Cards without hidden
    /// records leave the state untouched and post an info message instead.
    pub fn activate_more(&mut self) -> bool {
        let Some(name) = self.current_name().map(str::to_string) else {
            return false;
        };
        let opened = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.get_key_value(&name))
            .is_some_and(|(key, entry)| {
                PackagePreview::new(key, entry).request_detail(&mut self.list)
            });

        if opened {
            self.detail_scroll = 0;
        } else {
            self.add_message(
                MessageLevel::Info,
                format!("All versions of {name} are already shown"),
            );
        }
        opened
    }

    /// Close the detail surface through its close control
    pub fn close_detail(&mut self) {
        match self.catalog.as_ref() {
            Some(catalog) => DetailView::bind(self.list.selection(), catalog).close(&mut self.list),
            None => self.list.on_detail_closed(),
        }
    }

    /// Whether the detail surface is open
    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.list.is_detail_open()
    }

    /// Number of records on the detail surface
    #[must_use]
    pub fn detail_record_count(&self) -> usize {
        self.catalog.as_ref().map_or(0, |catalog| {
            DetailView::bind(self.list.selection(), catalog)
                .records()
                .len()
        })
    }

    /// Scroll the detail surface up one record
    pub const fn detail_scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Scroll the detail surface down one record
    pub fn detail_scroll_down(&mut self) {
        if self.detail_scroll + 1 < self.detail_record_count() {
            self.detail_scroll += 1;
        }
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove a character from the query (backspace)
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete character under cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Mark the browser to exit
    pub const fn quit(&mut self) {
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PackageEntry, VersionRecord};

    fn entry(count: usize) -> PackageEntry {
        PackageEntry::new(
            (0..count)
                .map(|i| VersionRecord::new(format!("1.{i}.0"), vec![format!("v0.{i}.0")]))
                .collect(),
        )
    }

    fn loaded_state() -> AppState {
        let catalog: VersionCatalog = vec![
            ("left-pad", entry(3)),
            ("react", entry(1)),
            ("redux", entry(2)),
            ("tiny", entry(1)),
        ]
        .into_iter()
        .collect();
        let mut state = AppState::new(MatchPolicy::default());
        state.set_catalog(catalog);
        state
    }

    #[test]
    fn test_loading_until_catalog_set() {
        let mut state = AppState::new(MatchPolicy::default());
        assert!(state.is_loading());
        assert_eq!(state.view(), CatalogView::Loading);
        assert_eq!(state.visible_count(), 0);

        state.set_catalog(VersionCatalog::new());
        assert!(!state.is_loading());
        assert!(state.view().ready().is_some());
    }

    #[test]
    fn test_query_typed_before_load_applies_after() {
        let mut state = AppState::new(MatchPolicy::default());
        for c in "re".chars() {
            state.query_push(c);
        }
        state.publish_query();
        assert!(state.search.is_none());

        let catalog: VersionCatalog = vec![("left-pad", entry(1)), ("react", entry(1))]
            .into_iter()
            .collect();
        state.set_catalog(catalog);
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.current_name(), Some("react"));
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = loaded_state();
        assert_eq!(state.current_name(), Some("left-pad"));

        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.current_name(), Some("tiny"));

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 3);

        state.cursor_up();
        assert_eq!(state.current_name(), Some("redux"));

        state.jump_to_start();
        assert_eq!(state.cursor, 0);

        state.jump_to_end();
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = loaded_state();
        state.visible_height = 2;
        state.jump_to_end();
        assert_eq!(state.scroll_offset, 2);
        state.jump_to_start();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_publish_query_filters_and_resets_cursor() {
        let mut state = loaded_state();
        state.jump_to_end();

        state.query_push('r');
        state.query_push('e');
        state.publish_query();

        assert_eq!(state.list.query(), "re");
        assert_eq!(state.cursor, 0);
        let search = state.search.as_ref().unwrap();
        assert_eq!(search.visible_names, vec!["react", "redux"]);
        assert_eq!(search.status_text(), "2 results found from 4 packages.");
    }

    #[test]
    fn test_with_query() {
        let mut state = AppState::new(MatchPolicy::default()).with_query("pad");
        assert_eq!(state.query_cursor, 3);
        assert_eq!(state.list.query(), "pad");

        state.set_catalog(vec![("left-pad", entry(1))].into_iter().collect());
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn test_activate_more_opens_detail() {
        let mut state = loaded_state();
        assert!(state.activate_more());
        assert!(state.is_detail_open());
        assert_eq!(
            state.list.selection().selected_name.as_deref(),
            Some("left-pad")
        );
        assert_eq!(state.detail_record_count(), 3);
    }

    #[test]
    fn test_activate_more_without_hidden_records() {
        let mut state = loaded_state();
        state.cursor_down();
        assert!(!state.activate_more());
        assert!(!state.is_detail_open());
        assert!(state.list.selection().selected_name.is_none());
        assert_eq!(state.active_messages().len(), 1);
    }

    #[test]
    fn test_close_detail_keeps_name() {
        let mut state = loaded_state();
        state.activate_more();
        state.close_detail();
        assert!(!state.is_detail_open());
        assert_eq!(
            state.list.selection().selected_name.as_deref(),
            Some("left-pad")
        );
    }

    #[test]
    fn test_detail_scroll_bounds() {
        let mut state = loaded_state();
        state.activate_more();
        state.detail_scroll_down();
        state.detail_scroll_down();
        state.detail_scroll_down();
        assert_eq!(state.detail_scroll, 2);
        state.detail_scroll_up();
        assert_eq!(state.detail_scroll, 1);
    }

    #[test]
    fn test_query_editing() {
        let mut state = AppState::new(MatchPolicy::default());

        for c in "hello".chars() {
            state.query_push(c);
        }
        assert_eq!(state.query, "hello");
        assert_eq!(state.query_cursor, 5);

        state.query_backspace();
        assert_eq!(state.query, "hell");
        assert_eq!(state.query_cursor, 4);

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 2);

        state.query_push('y');
        assert_eq!(state.query, "heyll");

        state.query_clear();
        assert!(state.query.is_empty());
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_query_delete_word() {
        let mut state = AppState::new(MatchPolicy::default());
        for c in "lib xml".chars() {
            state.query_push(c);
        }
        state.query_delete_word();
        assert_eq!(state.query, "lib ");
        state.query_delete_word();
        assert_eq!(state.query, "");
    }
}
