//! `CrlfWriter`: Newline translation for raw-mode terminals.
//!
//! Raw mode turns off the tty's output processing, so a bare `\n` moves the
//! cursor down without returning it to column 0. Rendered frames separate
//! rows with `\n`; this writer puts the carriage return back.

use std::io::{self, Write};

/// A writer that emits `\r\n` for every `\n` written through it.
#[derive(Debug)]
pub struct CrlfWriter<W> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    /// Wrap a writer.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// The wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// The wrapped writer, mutably. Bytes written here are not translated.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.iter().position(|&b| b == b'\n') {
            None => self.inner.write(buf),
            Some(0) => {
                self.inner.write_all(b"\r\n")?;
                Ok(1)
            }
            Some(end) => self.inner.write(&buf[..end]),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
