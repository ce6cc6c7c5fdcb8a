//! `OutputBuffer`: Single-write output buffer for ANSI sequences.

use crate::buffer::AnsiColor;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then handed to the sink with one
/// `write_all` and one `flush`.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical 80x25 frame.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Start a new row.
    #[inline]
    pub fn newline(&mut self) {
        self.data.push(b'\n');
    }

    /// Move the cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[1;1H");
    }

    /// Set foreground color (`ESC[30m`..`ESC[37m`).
    #[inline]
    pub fn set_fg(&mut self, color: AnsiColor) {
        let _ = write!(self.data, "\x1b[{}m", color.foreground_code());
    }

    /// Set background color (`ESC[40m`..`ESC[47m`).
    #[inline]
    pub fn set_bg(&mut self, color: AnsiColor) {
        let _ = write!(self.data, "\x1b[{}m", color.background_code());
    }

    /// Flush to a writer in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_sequences() {
        let mut out = OutputBuffer::new();
        out.set_fg(AnsiColor::Red);
        out.set_bg(AnsiColor::Blue);
        assert_eq!(out.as_bytes(), b"\x1b[31m\x1b[44m");
    }

    #[test]
    fn test_cursor_home_and_text() {
        let mut out = OutputBuffer::new();
        out.cursor_home();
        out.write_str("ab");
        out.newline();
        out.write_char('日');
        assert_eq!(out.as_bytes(), "\x1b[1;1Hab\n日".as_bytes());
    }

    #[test]
    fn test_default_preallocates_like_new() {
        let out = OutputBuffer::default();
        assert!(out.is_empty());
        assert!(out.data.capacity() >= 4096);
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::with_capacity(16);
        out.write_str("xyz");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"xyz");

        out.clear();
        assert!(out.is_empty());
    }
}
