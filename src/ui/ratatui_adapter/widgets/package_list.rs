//! Package card list
//!
//! Each card is [`CARD_HEIGHT`] rows: the package name, up to two version
//! records and the "And N more..." affordance (blank when the package has
//! nothing hidden). Cards have a fixed height so scrolling works in cards.

use crate::browse::PackagePreview;
use crate::catalog::VersionRecord;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Rows occupied by one card
pub const CARD_HEIGHT: u16 = 4;

/// Width of the original-version column on a card
const ORIGINAL_WIDTH: usize = 12;

/// Card list widget for the visible packages
pub struct PackageList<'a> {
    /// One preview per visible package
    previews: &'a [PackagePreview<'a>],
    /// Index of the card under the cursor
    cursor: usize,
    /// First card drawn
    scroll_offset: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> PackageList<'a> {
    /// Create a new card list
    #[must_use]
    pub const fn new(previews: &'a [PackagePreview<'a>], theme: &'a Theme) -> Self {
        Self {
            previews,
            cursor: 0,
            scroll_offset: 0,
            theme,
        }
    }

    /// Set cursor and scroll position
    #[must_use]
    pub const fn position(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    /// Number of whole cards that fit in `area` once the border is drawn
    #[must_use]
    pub const fn cards_that_fit(area: Rect) -> usize {
        (area.height.saturating_sub(2) / CARD_HEIGHT) as usize
    }

    fn record_line(&self, record: &VersionRecord) -> Line<'a> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{:<ORIGINAL_WIDTH$}", record.original),
                self.theme.original_style(),
            ),
            Span::raw(" "),
            Span::styled(record.converted_display(), self.theme.converted_style()),
        ])
    }

    fn render_card(&self, preview: &PackagePreview<'a>, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.package_style()
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(preview.name(), name_style),
        ])];
        lines.extend(preview.rows().iter().map(|record| self.record_line(record)));
        if let Some(label) = preview.more_label() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(label, self.theme.affordance_style()),
            ]));
        }
        lines.resize(CARD_HEIGHT as usize, Line::default());

        ListItem::new(Text::from(lines))
    }
}

impl Widget for PackageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Packages ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let capacity = (inner.height / CARD_HEIGHT).max(1) as usize;
        let start = self.scroll_offset.min(self.previews.len());
        let end = (start + capacity).min(self.previews.len());

        let items: Vec<ListItem> = self.previews[start..end]
            .iter()
            .enumerate()
            .map(|(offset, preview)| self.render_card(preview, start + offset == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
