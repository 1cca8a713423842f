//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and the match policy
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Active match policy
    policy: &'a str,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme, policy: &'a str) -> Self {
        Self {
            messages,
            theme,
            policy,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [messages_area, policy_area] =
            Layout::horizontal([Constraint::Percentage(80), Constraint::Percentage(20)])
                .areas(inner);

        // Show the most recent message
        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(messages_area, buf);
        }

        let indicator = Line::styled(
            format!("[{}]", self.policy),
            self.theme.info_style().add_modifier(Modifier::DIM),
        )
        .right_aligned();
        Paragraph::new(indicator).render(policy_area, buf);
    }
}
