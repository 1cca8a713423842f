//! Search bar widget for query input and the result count line

use crate::search::StatusPart;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Result count line, absent while loading
    status: Option<&'a [StatusPart]>,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            status: None,
            theme,
            focused: true,
        }
    }

    /// Show the result count line on the bottom border
    #[must_use]
    pub const fn with_status(mut self, status: &'a [StatusPart]) -> Self {
        self.status = Some(status);
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn status_line(&self, parts: &'a [StatusPart]) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(parts.iter().map(|part| {
            let style = if part.emphasis {
                self.theme.count_style()
            } else {
                self.theme.dimmed_style()
            };
            Span::styled(part.text.as_str(), style)
        }));
        spans.push(Span::raw(" "));
        Line::from(spans).right_aligned()
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search packages ");
        if let Some(parts) = self.status {
            block = block.title_bottom(self.status_line(parts));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor_span = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        if self.query.is_empty() {
            spans.push(cursor_span);
        } else {
            // Split query at cursor position
            let (before, after) = self.query.split_at(self.cursor);
            spans.push(Span::raw(before));
            spans.push(cursor_span);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
