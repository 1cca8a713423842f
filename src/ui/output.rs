//! Output abstraction layer
//!
//! Commands report through [`OutputWriter`] so the same code can print to a
//! terminal or be captured in tests.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use vermap::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("3 packages found.");
/// output.error("Package 'zlib' not found");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line (never suppressed)
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only results and errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Writer that keeps every message in memory
///
/// Used to capture command output.
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured messages of one level
    #[must_use]
    pub fn lines(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
