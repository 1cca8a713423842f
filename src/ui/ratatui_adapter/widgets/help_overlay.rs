//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Match policy shown in the footer
    policy: &'a str,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme, policy: &'a str) -> Self {
        Self { theme, policy }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(
            text,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'a>> {
        vec![
            Line::default(),
            self.heading("  Packages"),
            Line::default(),
            self.help_line("  ↑/↓", "Move between cards"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "Jump to first/last card"),
            self.help_line("  Enter / →", "Show all versions (\"And N more...\")"),
            self.help_line("  ESC", "Close versions, then quit"),
            Line::default(),
            self.heading("  Search"),
            Line::default(),
            self.help_line("  Type", "Filter package names"),
            self.help_line("  Ctrl+U", "Clear query"),
            self.help_line("  Ctrl+W", "Delete word"),
            self.help_line("  ←/→", "Move cursor in query"),
            Line::default(),
            Line::from(vec![
                Span::styled("  Matching: ", self.theme.dimmed_style()),
                Span::raw(self.policy),
            ]),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
