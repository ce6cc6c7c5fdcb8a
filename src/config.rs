//! Console configuration.

use crate::buffer::{AnsiColor, Buffer};

/// Configuration for an [`InteractiveConsole`](crate::InteractiveConsole).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Buffer width in columns.
    pub width: u16,
    /// Buffer height in rows.
    pub height: u16,
    /// Initial current foreground.
    pub foreground: AnsiColor,
    /// Initial current background.
    pub background: AnsiColor,
    /// Whether to hide the hardware cursor on construction.
    pub hide_cursor: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            foreground: Buffer::DEFAULT_FOREGROUND,
            background: Buffer::DEFAULT_BACKGROUND,
            hide_cursor: true,
        }
    }
}

impl ConsoleConfig {
    /// Set the buffer size (builder pattern).
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial colors (builder pattern).
    #[must_use]
    pub const fn with_colors(mut self, foreground: AnsiColor, background: AnsiColor) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Leave the hardware cursor as it is on construction.
    #[must_use]
    pub const fn keep_cursor(mut self) -> Self {
        self.hide_cursor = false;
        self
    }
}
