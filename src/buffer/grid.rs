//! Grid traits shared by [`Buffer`] and anything that owns one.

use super::buffer::{Buffer, LineDirection};
use super::cell::{AnsiColor, Cell};
use crate::error::Result;
use std::io::Write;

/// Read access to a rectangular grid of cells.
///
/// This is all [`Buffer::draw`] needs from its source. `cells` is row-major
/// and holds exactly `width * height` entries.
pub trait CellGrid {
    /// Width in columns.
    fn width(&self) -> u16;

    /// Height in rows.
    fn height(&self) -> u16;

    /// Row-major cell storage.
    fn cells(&self) -> &[Cell];
}

/// A drawing surface backed by a [`Buffer`].
///
/// Implementors only provide access to their buffer; every drawing primitive
/// and transform is forwarded to it.
pub trait Canvas: CellGrid {
    /// The backing buffer.
    fn buffer(&self) -> &Buffer;

    /// The backing buffer, mutably.
    fn buffer_mut(&mut self) -> &mut Buffer;

    /// Current foreground color.
    fn current_foreground(&self) -> AnsiColor {
        self.buffer().current_foreground()
    }

    /// Current background color.
    fn current_background(&self) -> AnsiColor {
        self.buffer().current_background()
    }

    /// Set the current foreground color.
    fn set_current_foreground(&mut self, color: AnsiColor) {
        self.buffer_mut().set_current_foreground(color);
    }

    /// Set the current background color.
    fn set_current_background(&mut self, color: AnsiColor) {
        self.buffer_mut().set_current_background(color);
    }

    /// See [`Buffer::is_out_of_bounds`].
    fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        self.buffer().is_out_of_bounds(x, y)
    }

    /// See [`Buffer::is_rect_out_of_bounds`].
    fn is_rect_out_of_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.buffer().is_rect_out_of_bounds(x, y, width, height)
    }

    /// See [`Buffer::is_fully_in_bounds`].
    fn is_fully_in_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self.buffer().is_fully_in_bounds(x, y, width, height)
    }

    /// See [`Buffer::write_buffer`].
    fn write_buffer(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.buffer().write_buffer(writer)
    }

    /// See [`Buffer::cell`].
    fn cell(&mut self, x: i32, y: i32, cell: Cell) {
        self.buffer_mut().cell(x, y, cell);
    }

    /// See [`Buffer::text`].
    fn text(&mut self, x: i32, y: i32, text: &str) {
        self.buffer_mut().text(x, y, text);
    }

    /// See [`Buffer::text_with_foreground`].
    fn text_with_foreground(&mut self, x: i32, y: i32, text: &str, foreground: AnsiColor) {
        self.buffer_mut().text_with_foreground(x, y, text, foreground);
    }

    /// See [`Buffer::text_with_colors`].
    fn text_with_colors(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        foreground: AnsiColor,
        background: AnsiColor,
    ) {
        self.buffer_mut()
            .text_with_colors(x, y, text, foreground, background);
    }

    /// See [`Buffer::rectangle`].
    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        self.buffer_mut().rectangle(x, y, width, height, cell);
    }

    /// See [`Buffer::boxed`].
    fn boxed(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        self.buffer_mut().boxed(x, y, width, height, cell);
    }

    /// See [`Buffer::box_with`].
    #[allow(clippy::too_many_arguments)]
    fn box_with(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        sides: Cell,
        top_bottom: Cell,
        corner: Cell,
    ) {
        self.buffer_mut()
            .box_with(x, y, width, height, sides, top_bottom, corner);
    }

    /// See [`Buffer::line`].
    fn line(&mut self, x: i32, y: i32, length: i32, direction: LineDirection, cell: Cell) {
        self.buffer_mut().line(x, y, length, direction, cell);
    }

    /// See [`Buffer::draw`].
    fn draw(&mut self, x: i32, y: i32, source: &dyn CellGrid) {
        self.buffer_mut().draw(x, y, source);
    }

    /// See [`Buffer::get_cell_at`].
    fn get_cell_at(&self, x: i32, y: i32) -> Result<Cell> {
        self.buffer().get_cell_at(x, y)
    }

    /// See [`Buffer::get_string_at`].
    fn get_string_at(&self, x: i32, y: i32, length: i32) -> String {
        self.buffer().get_string_at(x, y, length)
    }

    /// See [`Buffer::scroll`].
    fn scroll(&mut self, dx: i32, dy: i32) {
        self.buffer_mut().scroll(dx, dy);
    }

    /// See [`Buffer::flip`].
    fn flip(&mut self, horizontal: bool, vertical: bool) {
        self.buffer_mut().flip(horizontal, vertical);
    }

    /// See [`Buffer::rotate`].
    fn rotate(&mut self, x: i32, y: i32, size: i32, clockwise: bool) {
        self.buffer_mut().rotate(x, y, size, clockwise);
    }

    /// See [`Buffer::copy`].
    fn copy(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Buffer> {
        self.buffer().copy(x, y, width, height)
    }
}

impl Canvas for Buffer {
    fn buffer(&self) -> &Buffer {
        self
    }

    fn buffer_mut(&mut self) -> &mut Buffer {
        self
    }
}
