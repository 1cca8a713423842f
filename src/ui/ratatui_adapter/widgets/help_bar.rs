//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "Ctrl+U")
    pub key: String,
    /// Action description (e.g., "more", "clear")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints shown while browsing cards
    #[must_use]
    pub fn grid_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "navigate"),
            KeyHint::new("Enter", "more"),
            KeyHint::new("Ctrl+U", "clear"),
            KeyHint::new("ESC", "quit"),
            KeyHint::new("F1", "help"),
        ]
    }

    /// Hints shown while the detail surface is open
    #[must_use]
    pub fn detail_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "scroll"),
            KeyHint::new("ESC", "close"),
            KeyHint::new("F1", "help"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_hints_in_order() {
        let theme = Theme::default();
        let hints = HelpBar::grid_hints();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        HelpBar::new(&hints, &theme).render(buf.area, &mut buf);

        let row: String = (0..80u16).map(|x| buf[(x, 0u16)].symbol()).collect();
        let more = row.find("Enter:more").unwrap();
        let quit = row.find("ESC:quit").unwrap();
        assert!(more < quit);
    }
}
