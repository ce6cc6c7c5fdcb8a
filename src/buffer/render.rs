//! Render: Turn a buffer into a single ANSI byte stream.
//!
//! Every render repaints the whole grid from the home position. Color escapes
//! are only emitted when a cell's resolved color differs from the previous
//! cell's, so a run of same-colored cells costs one pair of escapes.
//!
//! ```text
//! ESC[1;1H  ESC[31m ESC[44m xxxxx \n xxxxx \n ESC[37m ESC[40m ␠␠␠␠␠ ...
//! └─home──┘ └──first cell colors──┘        └──color change──┘
//! ```

use super::buffer::Buffer;
use super::cell::AnsiColor;
use crate::terminal::OutputBuffer;
use std::io::Write;
use tracing::trace;

/// Statistics from a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of cells written.
    pub cells: usize,
    /// Number of color escapes emitted.
    pub color_changes: usize,
    /// Total bytes produced.
    pub bytes: usize,
}

/// Colors last emitted to the output.
///
/// `None` means nothing has been emitted yet, so the first cell always
/// writes both escapes.
#[derive(Debug, Clone, Copy, Default)]
struct RenderState {
    fg: Option<AnsiColor>,
    bg: Option<AnsiColor>,
}

impl RenderState {
    #[inline]
    fn set_fg(&mut self, output: &mut OutputBuffer, color: AnsiColor) -> bool {
        if self.fg == Some(color) {
            return false;
        }
        output.set_fg(color);
        self.fg = Some(color);
        true
    }

    #[inline]
    fn set_bg(&mut self, output: &mut OutputBuffer, color: AnsiColor) -> bool {
        if self.bg == Some(color) {
            return false;
        }
        output.set_bg(color);
        self.bg = Some(color);
        true
    }
}

/// Render every cell of `buffer` into `output`.
///
/// The stream starts with a cursor-home escape. Rows are separated by a bare
/// `\n` with none after the last row. `Default` channels resolve to the
/// buffer's current colors, and to black if those are `Default` as well.
/// Control characters, including NUL, print as a space.
pub fn render_full(buffer: &Buffer, output: &mut OutputBuffer) -> RenderStats {
    let start = output.len();
    let default_fg = buffer.current_foreground().or(AnsiColor::Black);
    let default_bg = buffer.current_background().or(AnsiColor::Black);
    let mut state = RenderState::default();
    let mut stats = RenderStats::default();

    output.cursor_home();
    for (y, row) in buffer.rows().enumerate() {
        if y > 0 {
            output.newline();
        }
        for cell in row {
            if state.set_fg(output, cell.foreground.or(default_fg)) {
                stats.color_changes += 1;
            }
            if state.set_bg(output, cell.background.or(default_bg)) {
                stats.color_changes += 1;
            }
            let ch = cell.character;
            output.write_char(if ch.is_control() { ' ' } else { ch });
            stats.cells += 1;
        }
    }

    stats.bytes = output.len() - start;
    trace!(
        cells = stats.cells,
        color_changes = stats.color_changes,
        bytes = stats.bytes,
        "buffer rendered"
    );
    stats
}

impl Buffer {
    /// Render the buffer and write it to `writer` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_buffer<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut output = OutputBuffer::with_capacity(self.estimated_render_size());
        render_full(self, &mut output);
        output.flush_to(writer)
    }

    /// Render the buffer into a string.
    pub fn to_ansi_string(&self) -> String {
        let mut output = OutputBuffer::with_capacity(self.estimated_render_size());
        render_full(self, &mut output);
        String::from_utf8_lossy(output.as_bytes()).into_owned()
    }

    /// One byte per cell and row break, plus a few color changes.
    fn estimated_render_size(&self) -> usize {
        self.len() + usize::from(self.height()) + 64
    }
}
