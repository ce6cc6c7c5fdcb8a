//! System console abstraction and its crossterm backend.

use super::crlf::CrlfWriter;
use super::keys::KeyInfo;
use crate::error::Result;
use crossterm::{cursor, event, execute, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::debug;

/// The terminal a console renders to and reads keys from.
///
/// Tests implement this with a scripted key queue and an in-memory sink.
pub trait SystemConsole {
    /// Show or hide the hardware cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Check whether a key press is waiting, without blocking.
    fn key_available(&mut self) -> Result<bool>;

    /// Block until a key is pressed and return it.
    fn read_key(&mut self) -> Result<KeyInfo>;

    /// Move the hardware cursor (0-indexed column and row).
    fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<()>;

    /// The sink rendered frames are written to.
    fn out(&mut self) -> &mut dyn Write;
}

/// A [`SystemConsole`] backed by the process terminal through crossterm.
///
/// Raw mode is enabled on construction and restored on drop. While it is on,
/// [`out`](SystemConsole::out) translates `\n` into `\r\n`.
pub struct CrosstermConsole {
    stdout: CrlfWriter<Stdout>,
}

impl CrosstermConsole {
    /// Take over the process terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("raw mode enabled");
        Ok(Self {
            stdout: CrlfWriter::new(io::stdout()),
        })
    }

    /// Size of the terminal as `(columns, rows)`.
    pub fn size() -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }
}

impl SystemConsole for CrosstermConsole {
    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }

    fn key_available(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_key(&mut self) -> Result<KeyInfo> {
        loop {
            if let event::Event::Key(key) = event::read()? {
                if let Some(info) = KeyInfo::from_crossterm(key) {
                    return Ok(info);
                }
            }
        }
    }

    fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<()> {
        execute!(self.stdout, cursor::MoveTo(column, row))?;
        Ok(())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

impl Drop for CrosstermConsole {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show);
        let _ = terminal::disable_raw_mode();
        debug!("raw mode disabled");
    }
}

impl std::fmt::Debug for CrosstermConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermConsole").finish_non_exhaustive()
    }
}
