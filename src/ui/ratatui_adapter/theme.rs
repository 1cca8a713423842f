//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the card under the cursor
    pub selection_bg: Color,
    /// Foreground color for the card under the cursor
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for package names
    pub package: Color,
    /// Color for original version identifiers
    pub original: Color,
    /// Color for converted version identifiers
    pub converted: Color,
    /// Color for counts in the status line
    pub count: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            package: Color::White,
            original: Color::Yellow,
            converted: Color::Green,
            count: Color::Blue,
        }
    }

    /// Style for the card under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for package names on cards and the detail header
    #[must_use]
    pub fn package_style(&self) -> Style {
        Style::default()
            .fg(self.package)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for original versions
    #[must_use]
    pub fn original_style(&self) -> Style {
        Style::default().fg(self.original)
    }

    /// Style for converted versions
    #[must_use]
    pub fn converted_style(&self) -> Style {
        Style::default().fg(self.converted)
    }

    /// Style for the "And N more..." affordance
    #[must_use]
    pub fn affordance_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for counts in the status line
    #[must_use]
    pub fn count_style(&self) -> Style {
        Style::default()
            .fg(self.count)
            .add_modifier(Modifier::BOLD)
    }
}
