//! Terminal capability detection and coloured notices

use owo_colors::{colors::css, OwoColorize};

/// Detects whether coloured output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < 60)
}

/// Extension trait for colouring user-facing notices
pub trait Colorize {
    /// The plain text of the notice
    fn plain(&self) -> &str;

    /// Color as success (green)
    fn success(&self) -> String {
        paint(self.plain(), |s| s.fg::<css::Green>().to_string())
    }

    /// Color as warning (amber)
    fn warning(&self) -> String {
        paint(self.plain(), |s| s.fg::<css::Orange>().to_string())
    }

    /// Dim the text
    fn dim(&self) -> String {
        paint(self.plain(), |s| s.dimmed().to_string())
    }
}

impl Colorize for str {
    fn plain(&self) -> &str {
        self
    }
}

impl Colorize for String {
    fn plain(&self) -> &str {
        self
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
