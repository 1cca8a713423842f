//! Details modal widget for the full version list of one package

use crate::browse::DetailView;
use crate::catalog::VersionRecord;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Width of the original-version column
const ORIGINAL_WIDTH: usize = 14;

/// Details modal widget that lists every version record of the selected package
pub struct DetailsModal<'a> {
    /// Detail surface bound to the current selection
    detail: &'a DetailView<'a>,
    /// Index of the first record drawn
    scroll: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(detail: &'a DetailView<'a>, theme: &'a Theme) -> Self {
        Self {
            detail,
            scroll: 0,
            theme,
        }
    }

    /// Start drawing records at `scroll`
    #[must_use]
    pub const fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height) / 2),
            Constraint::Percentage(height),
            Constraint::Percentage((100 - height) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn record_line(&self, record: &'a VersionRecord) -> Line<'a> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<ORIGINAL_WIDTH$}", record.original),
                self.theme.original_style(),
            ),
            Span::styled(record.converted_display(), self.theme.converted_style()),
        ])
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'a>> {
        let records = self.detail.records();
        let mut summary = vec![Span::styled(
            format!("{} versions", records.len()),
            self.theme.dimmed_style(),
        )];
        if let Some(latest) = self.detail.latest_converted() {
            summary.push(Span::styled(", latest ", self.theme.dimmed_style()));
            summary.push(Span::styled(latest, self.theme.converted_style()));
        }

        let mut lines = vec![
            Line::from(summary),
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<ORIGINAL_WIDTH$}", "Original"),
                    self.theme.dimmed_style().add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(
                    "Converted",
                    self.theme.dimmed_style().add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        ];

        lines.extend(
            records
                .iter()
                .skip(self.scroll)
                .map(|record| self.record_line(record)),
        );
        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(name) = self.detail.name().filter(|_| self.detail.is_visible()) else {
            return;
        };

        let popup_area = Self::centered_rect(80, 70, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(Line::styled(format!(" {name} "), self.theme.package_style()))
            .title_alignment(Alignment::Center)
            .title_bottom(
                Line::styled(" Esc close  ↑/↓ scroll ", self.theme.dimmed_style()).centered(),
            );

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
