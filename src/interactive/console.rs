//! `InteractiveConsole`: Buffer plus system console, with line input.

use crate::buffer::{Buffer, Canvas, Cell, CellGrid};
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::terminal::{CrosstermConsole, KeyCode, KeyInfo, SystemConsole};
use tracing::debug;

/// A drawable buffer that renders to, and reads keys from, a system console.
pub struct InteractiveConsole<S: SystemConsole> {
    /// Cells drawn by the caller.
    buffer: Buffer,
    /// Terminal the buffer is rendered to.
    system: S,
}

impl<S: SystemConsole> InteractiveConsole<S> {
    /// Create a console with a buffer sized and colored from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// for a zero size, or an I/O error if the cursor cannot be hidden.
    pub fn new(mut system: S, config: ConsoleConfig) -> Result<Self> {
        let mut buffer = Buffer::try_new(i32::from(config.width), i32::from(config.height))?;
        buffer.set_current_colors(config.foreground, config.background);
        if config.hide_cursor {
            system.set_cursor_visible(false)?;
        }
        debug!(
            width = config.width,
            height = config.height,
            "interactive console created"
        );
        Ok(Self { buffer, system })
    }

    /// The underlying system console.
    pub const fn system(&self) -> &S {
        &self.system
    }

    /// The underlying system console, mutably.
    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }

    /// Render the whole buffer to the console.
    pub fn update(&mut self) -> Result<()> {
        self.buffer.write_buffer(self.system.out())?;
        Ok(())
    }

    /// Check whether a key press is waiting.
    pub fn key_available(&mut self) -> Result<bool> {
        self.system.key_available()
    }

    /// Block until a key is pressed.
    pub fn read_key(&mut self) -> Result<KeyInfo> {
        self.system.read_key()
    }

    /// Let the user type a line of text at (x, y), echoing it into the buffer.
    ///
    /// At most `max_length` characters are accepted, and never more than fit
    /// on the row. Backspace removes the last character. Control characters
    /// and keys that type nothing are ignored. Input ends with Enter, and the
    /// typed text is read back from the buffer.
    ///
    /// Returns an empty string without reading any key if (x, y) is outside
    /// the buffer.
    pub fn read_text(&mut self, x: i32, y: i32, max_length: i32) -> Result<String> {
        if self.buffer.is_out_of_bounds(x, y) {
            return Ok(String::new());
        }
        let max = (i32::from(self.buffer.width()) - x).min(max_length);
        let mut len = 0;

        self.system.set_cursor_visible(true)?;
        self.place_cursor(x, y)?;

        loop {
            let key = self.system.read_key()?;
            match key.code {
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    if len == 0 {
                        continue;
                    }
                    len -= 1;
                    self.buffer.cell(x + len, y, Cell::ZERO);
                }
                _ => {
                    let Some(c) = key.character() else {
                        continue;
                    };
                    if len >= max || c.is_control() {
                        continue;
                    }
                    self.buffer.cell(x + len, y, Cell::from_char(c));
                    len += 1;
                }
            }

            self.system.set_cursor_visible(false)?;
            self.update()?;
            self.system.set_cursor_visible(true)?;
            self.place_cursor(x + len, y)?;
        }

        self.system.set_cursor_visible(false)?;
        let text = self.buffer.get_string_at(x, y, len);
        debug!(x, y, len, "line input finished");
        Ok(text)
    }

    fn place_cursor(&mut self, x: i32, y: i32) -> Result<()> {
        let column = u16::try_from(x).unwrap_or(u16::MAX);
        let row = u16::try_from(y).unwrap_or(u16::MAX);
        self.system.set_cursor_position(column, row)
    }
}

impl InteractiveConsole<CrosstermConsole> {
    /// Take over the process terminal with a buffer configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the size is zero.
    pub fn from_terminal(config: ConsoleConfig) -> Result<Self> {
        Self::new(CrosstermConsole::new()?, config)
    }

    /// Like [`from_terminal`](Self::from_terminal), with the buffer sized to
    /// the terminal window.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried or raw mode
    /// cannot be enabled.
    pub fn fit_terminal(config: ConsoleConfig) -> Result<Self> {
        let (width, height) = CrosstermConsole::size()?;
        Self::from_terminal(config.with_size(width, height))
    }
}

impl<S: SystemConsole> CellGrid for InteractiveConsole<S> {
    fn width(&self) -> u16 {
        self.buffer.width()
    }

    fn height(&self) -> u16 {
        self.buffer.height()
    }

    fn cells(&self) -> &[Cell] {
        self.buffer.cells()
    }
}

impl<S: SystemConsole> Canvas for InteractiveConsole<S> {
    fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }
}

impl<S: SystemConsole> std::fmt::Debug for InteractiveConsole<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractiveConsole")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
