//! Buffer: A grid of cells with clipped drawing primitives.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order.
//!
//! Drawing never fails. Requests with a non-positive size or that miss the
//! grid entirely are ignored; requests that overlap the grid partially are
//! clipped cell by cell.

use super::cell::{AnsiColor, Cell};
use super::grid::CellGrid;
use crate::error::{Error, Result};
use crate::layout::Rect;
use std::ops::Range;
use tracing::trace;

/// Direction of a [`Buffer::line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineDirection {
    /// Left to right along a row.
    #[default]
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

/// A grid of cells.
///
/// The buffer stores cells in a contiguous `Vec`.
/// Access is in row-major order: `index = y * width + x`.
///
/// # Default colors
///
/// The buffer carries a current foreground and background. Drawing
/// primitives stamp them into any [`AnsiColor::Default`] channel of the cells
/// they write; rendering resolves whatever `Default` channels remain.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
    /// Foreground applied to `Default` foregrounds.
    current_foreground: AnsiColor,
    /// Background applied to `Default` backgrounds.
    current_background: AnsiColor,
}

impl Buffer {
    /// Foreground a new buffer starts with.
    pub const DEFAULT_FOREGROUND: AnsiColor = AnsiColor::White;
    /// Background a new buffer starts with.
    pub const DEFAULT_BACKGROUND: AnsiColor = AnsiColor::Black;

    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to [`Cell::ZERO`].
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::ZERO; size],
            width,
            height,
            current_foreground: Self::DEFAULT_FOREGROUND,
            current_background: Self::DEFAULT_BACKGROUND,
        }
    }

    /// Create a new buffer, rejecting sizes that are not positive or do not
    /// fit a `u16`.
    pub fn try_new(width: i32, height: i32) -> Result<Self> {
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Self::new(w, h)),
            _ => Err(Error::InvalidDimensions { width, height }),
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a mutable reference to the underlying cell slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Current foreground color.
    #[inline]
    pub const fn current_foreground(&self) -> AnsiColor {
        self.current_foreground
    }

    /// Current background color.
    #[inline]
    pub const fn current_background(&self) -> AnsiColor {
        self.current_background
    }

    /// Set the current foreground color.
    ///
    /// Cells already drawn keep the color they were stamped with.
    #[inline]
    pub fn set_current_foreground(&mut self, color: AnsiColor) {
        self.current_foreground = color;
    }

    /// Set the current background color.
    #[inline]
    pub fn set_current_background(&mut self, color: AnsiColor) {
        self.current_background = color;
    }

    /// Set both current colors.
    #[inline]
    pub fn set_current_colors(&mut self, foreground: AnsiColor, background: AnsiColor) {
        self.current_foreground = foreground;
        self.current_background = background;
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            None
        } else {
            Some(self.offset(x, y))
        }
    }

    /// Check if a single coordinate lies outside the buffer.
    #[inline]
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= i32::from(self.width) || y < 0 || y >= i32::from(self.height)
    }

    /// Check if a rectangle has no overlap with the buffer.
    ///
    /// Negative sizes count as out of bounds. A rectangle that starts before
    /// the origin but reaches into the buffer is not out of bounds.
    #[inline]
    pub fn is_rect_out_of_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        Rect::new(x, y, width, height).misses(self.width, self.height)
    }

    /// Check if a rectangle lies entirely inside the buffer.
    #[inline]
    pub fn is_fully_in_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        Rect::new(x, y, width, height).fits_within(self.width, self.height)
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(usize::from(self.width))
    }

    /// Get a mutable iterator over rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        self.cells.chunks_exact_mut(usize::from(self.width))
    }

    /// Reset every cell to [`Cell::ZERO`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::ZERO);
    }

    /// Write one cell verbatim at (x, y).
    pub fn cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
        } else {
            trace!(x, y, "cell outside buffer, skipped");
        }
    }

    /// Write text at (x, y) in the current colors.
    pub fn text(&mut self, x: i32, y: i32, text: &str) {
        self.text_with_colors(x, y, text, self.current_foreground, self.current_background);
    }

    /// Write text at (x, y) in the given foreground and the current
    /// background.
    pub fn text_with_foreground(&mut self, x: i32, y: i32, text: &str, foreground: AnsiColor) {
        self.text_with_colors(x, y, text, foreground, self.current_background);
    }

    /// Write text at (x, y), one character per cell, in the given colors.
    ///
    /// Characters that would land left of column 0 or past the end of the
    /// row are dropped.
    pub fn text_with_colors(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        foreground: AnsiColor,
        background: AnsiColor,
    ) {
        let Some(area) = self.clip(Rect::new(x, y, saturating_len(text.chars().count()), 1)) else {
            trace!(x, y, "text outside buffer, skipped");
            return;
        };
        let template = self.resolve(Cell::new('\0', foreground, background));
        // Number of leading characters that fall left of the buffer.
        let skipped = usize::try_from(i64::from(area.x) - i64::from(x)).unwrap_or(0);
        let span = self.row_span(area, area.y);
        for (slot, character) in self.cells[span].iter_mut().zip(text.chars().skip(skipped)) {
            *slot = template.with_character(character);
        }
    }

    /// Fill a rectangular region with a cell.
    pub fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        let Some(area) = self.clip(Rect::new(x, y, width, height)) else {
            trace!(x, y, width, height, "rectangle outside buffer, skipped");
            return;
        };
        let cell = self.resolve(cell);
        for row in area.y..area.y + area.height {
            let span = self.row_span(area, row);
            self.cells[span].fill(cell);
        }
    }

    /// Draw a frame using the same cell for sides, top/bottom and corners.
    pub fn boxed(&mut self, x: i32, y: i32, width: i32, height: i32, cell: Cell) {
        self.box_with(x, y, width, height, cell, cell, cell);
    }

    /// Draw a frame. The interior is left untouched.
    ///
    /// Corner positions get `corner`, the rest of the first and last rows get
    /// `top_bottom`, and the rest of the first and last columns get `sides`.
    #[allow(clippy::too_many_arguments)]
    pub fn box_with(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        sides: Cell,
        top_bottom: Cell,
        corner: Cell,
    ) {
        let Some(area) = self.clip(Rect::new(x, y, width, height)) else {
            trace!(x, y, width, height, "box outside buffer, skipped");
            return;
        };
        let sides = self.resolve(sides);
        let top_bottom = self.resolve(top_bottom);
        let corner = self.resolve(corner);

        for row in area.y..area.y + area.height {
            let i = i64::from(row) - i64::from(y);
            for column in area.x..area.x + area.width {
                let j = i64::from(column) - i64::from(x);
                let cell = match frame_part(i, j, i64::from(width), i64::from(height)) {
                    Some(FramePart::Corner) => corner,
                    Some(FramePart::TopBottom) => top_bottom,
                    Some(FramePart::Side) => sides,
                    None => continue,
                };
                let idx = self.offset(column, row);
                self.cells[idx] = cell;
            }
        }
    }

    /// Draw a run of `length` cells from (x, y).
    pub fn line(&mut self, x: i32, y: i32, length: i32, direction: LineDirection, cell: Cell) {
        let footprint = match direction {
            LineDirection::Horizontal => Rect::new(x, y, length, 1),
            LineDirection::Vertical => Rect::new(x, y, 1, length),
        };
        let Some(area) = self.clip(footprint) else {
            trace!(x, y, length, ?direction, "line outside buffer, skipped");
            return;
        };
        let cell = self.resolve(cell);
        let (step, count) = match direction {
            LineDirection::Horizontal => (1, area.width),
            LineDirection::Vertical => (usize::from(self.width), area.height),
        };
        let start = self.offset(area.x, area.y);
        for idx in (start..).step_by(step).take(to_usize(count)) {
            self.cells[idx] = cell;
        }
    }

    /// Get the cell at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is outside the buffer.
    pub fn get_cell_at(&self, x: i32, y: i32) -> Result<Cell> {
        self.index_of(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(Error::OutOfBounds { x, y })
    }

    /// Read up to `length` characters along row `y`, starting at column `x`.
    ///
    /// NUL characters at either end are trimmed; NULs between written
    /// characters are kept. Out-of-bounds requests read as an empty string.
    pub fn get_string_at(&self, x: i32, y: i32, length: i32) -> String {
        let Some(area) = self.clip(Rect::new(x, y, length, 1)) else {
            return String::new();
        };
        let text: String = self.cells[self.row_span(area, area.y)]
            .iter()
            .map(|cell| cell.character)
            .collect();
        text.trim_matches('\0').to_owned()
    }

    /// Draw another grid onto this buffer with its top-left corner at (x, y).
    ///
    /// Transparent source cells (NUL character) leave the destination as it
    /// is. The source is indexed by its own width.
    pub fn draw<G: CellGrid + ?Sized>(&mut self, x: i32, y: i32, source: &G) {
        let source_width = usize::from(source.width());
        let placed = Rect::new(x, y, i32::from(source.width()), i32::from(source.height()));
        let Some(area) = self.clip(placed) else {
            trace!(x, y, "draw outside buffer, skipped");
            return;
        };
        let source_cells = source.cells();
        let first_column = to_usize(i64::from(area.x) - i64::from(x));
        for row in area.y..area.y + area.height {
            let source_row = to_usize(i64::from(row) - i64::from(y));
            let start = source_row * source_width + first_column;
            let Some(src) = source_cells.get(start..start + to_usize(area.width)) else {
                break;
            };
            let span = self.row_span(area, row);
            for (dst, src) in self.cells[span].iter_mut().zip(src) {
                if !src.is_transparent() {
                    *dst = *src;
                }
            }
        }
    }

    /// Intersect a footprint with the buffer extent.
    #[inline]
    fn clip(&self, footprint: Rect) -> Option<Rect> {
        footprint.clip(self.width, self.height)
    }

    /// Apply the current colors to `Default` channels.
    #[inline]
    const fn resolve(&self, cell: Cell) -> Cell {
        cell.override_defaults(self.current_foreground, self.current_background)
    }

    /// Linear index of an in-bounds coordinate.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        to_usize(y) * usize::from(self.width) + to_usize(x)
    }

    /// Index range of a clipped area's columns on one row.
    #[inline]
    fn row_span(&self, area: Rect, row: i32) -> Range<usize> {
        let start = self.offset(area.x, row);
        start..start + to_usize(area.width)
    }
}

impl CellGrid for Buffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("current_foreground", &self.current_foreground)
            .field("current_background", &self.current_background)
            .finish_non_exhaustive()
    }
}

/// Where a position sits in a box frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramePart {
    Corner,
    TopBottom,
    Side,
}

/// Classify row `i`, column `j` of a `width`×`height` frame.
///
/// Returns `None` for interior positions.
const fn frame_part(i: i64, j: i64, width: i64, height: i64) -> Option<FramePart> {
    let edge_row = i == 0 || i == height - 1;
    let edge_column = j == 0 || j == width - 1;
    match (edge_row, edge_column) {
        (true, true) => Some(FramePart::Corner),
        (true, false) => Some(FramePart::TopBottom),
        (false, true) => Some(FramePart::Side),
        (false, false) => None,
    }
}

/// Convert a coordinate already clipped to the grid into an index component.
#[inline]
fn to_usize<T: TryInto<usize>>(value: T) -> usize {
    value.try_into().unwrap_or(0)
}

/// Character count as a rectangle width.
#[inline]
fn saturating_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_ON_BLUE: Cell = Cell::new('x', AnsiColor::Red, AnsiColor::Blue);
    const SOME_CELL: Cell = Cell::new('A', AnsiColor::White, AnsiColor::Black);

    fn small() -> Buffer {
        Buffer::new(5, 5)
    }

    fn all_zero(buffer: &Buffer) -> bool {
        buffer.cells().iter().all(|cell| *cell == Cell::ZERO)
    }

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(5, 10);
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.len(), 50);
        assert!(all_zero(&buffer));
        assert_eq!(buffer.current_foreground(), AnsiColor::White);
        assert_eq!(buffer.current_background(), AnsiColor::Black);
    }

    #[test]
    #[should_panic]
    fn test_buffer_zero_width() {
        Buffer::new(0, 24);
    }

    #[test]
    fn test_try_new_rejects_bad_sizes() {
        assert!(matches!(
            Buffer::try_new(0, 3),
            Err(Error::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(Buffer::try_new(3, -1).is_err());
        assert!(Buffer::try_new(70_000, 1).is_err());
        assert!(Buffer::try_new(3, 2).is_ok());
    }

    #[test]
    fn test_index_of() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.index_of(5, 10), Some(10 * 80 + 5));
        assert_eq!(buffer.index_of(80, 0), None);
        assert_eq!(buffer.index_of(-1, 0), None);
    }

    #[test]
    fn test_bounds_predicates() {
        let buffer = small();
        assert!(buffer.is_out_of_bounds(5, 0));
        assert!(buffer.is_out_of_bounds(0, -1));
        assert!(!buffer.is_out_of_bounds(4, 4));

        assert!(!buffer.is_rect_out_of_bounds(-1, -1, 3, 3));
        assert!(buffer.is_rect_out_of_bounds(-3, -3, 3, 3));
        assert!(buffer.is_rect_out_of_bounds(0, 0, -1, 3));

        assert!(buffer.is_fully_in_bounds(0, 0, 5, 5));
        assert!(!buffer.is_fully_in_bounds(1, 0, 5, 5));
    }

    #[test]
    fn test_full_rectangle() {
        let mut buffer = small();
        buffer.rectangle(0, 0, 5, 5, RED_ON_BLUE);
        assert!(buffer.cells().iter().all(|cell| *cell == RED_ON_BLUE));
    }

    #[test]
    fn test_partial_rectangle() {
        let mut buffer = small();
        buffer.rectangle(1, 1, 3, 4, RED_ON_BLUE);
        for y in 0..5 {
            for x in 0..5 {
                let expected = if (1..=3).contains(&x) && (1..=4).contains(&y) {
                    RED_ON_BLUE
                } else {
                    Cell::ZERO
                };
                assert_eq!(buffer.get_cell_at(x, y).unwrap(), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rectangle_clipped_at_origin() {
        let mut buffer = small();
        buffer.rectangle(-1, -1, 3, 3, RED_ON_BLUE);
        assert_eq!(buffer.get_cell_at(0, 0).unwrap(), RED_ON_BLUE);
        assert_eq!(buffer.get_cell_at(1, 1).unwrap(), RED_ON_BLUE);
        assert_eq!(buffer.get_cell_at(2, 0).unwrap(), Cell::ZERO);
        assert_eq!(buffer.get_cell_at(0, 2).unwrap(), Cell::ZERO);
        // Nothing wrapped into the previous or next row.
        assert_eq!(buffer.cells().iter().filter(|c| **c == RED_ON_BLUE).count(), 4);
    }

    #[test]
    fn test_rectangle_resolves_defaults() {
        let mut buffer = small();
        buffer.set_current_colors(AnsiColor::Green, AnsiColor::Yellow);
        buffer.rectangle(0, 0, 1, 1, Cell::from_char('#'));
        assert_eq!(
            buffer.get_cell_at(0, 0).unwrap(),
            Cell::new('#', AnsiColor::Green, AnsiColor::Yellow)
        );

        // Later color changes do not repaint what is already drawn.
        buffer.set_current_colors(AnsiColor::Red, AnsiColor::Red);
        assert_eq!(buffer.get_cell_at(0, 0).unwrap().foreground, AnsiColor::Green);
    }

    #[test]
    fn test_cell_is_written_verbatim() {
        let mut buffer = small();
        buffer.cell(2, 3, Cell::from_char('q'));
        assert_eq!(buffer.get_cell_at(2, 3).unwrap(), Cell::from_char('q'));
    }

    #[test]
    fn test_box_frame_classification() {
        let mut buffer = small();
        let side = Cell::new('|', AnsiColor::Red, AnsiColor::Black);
        let top = Cell::new('-', AnsiColor::Green, AnsiColor::Black);
        let corner = Cell::new('+', AnsiColor::Blue, AnsiColor::Black);
        buffer.box_with(0, 0, 5, 4, side, top, corner);

        for (x, y) in [(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert_eq!(buffer.get_cell_at(x, y).unwrap(), corner);
        }
        for x in 1..4 {
            assert_eq!(buffer.get_cell_at(x, 0).unwrap(), top);
            assert_eq!(buffer.get_cell_at(x, 3).unwrap(), top);
        }
        for y in 1..3 {
            assert_eq!(buffer.get_cell_at(0, y).unwrap(), side);
            assert_eq!(buffer.get_cell_at(4, y).unwrap(), side);
        }
        for y in 1..3 {
            for x in 1..4 {
                assert_eq!(buffer.get_cell_at(x, y).unwrap(), Cell::ZERO);
            }
        }
        // Row below the frame is untouched.
        assert_eq!(buffer.get_string_at(0, 4, 5), "");
    }

    #[test]
    fn test_box_clipped_keeps_frame_positions() {
        let mut buffer = small();
        buffer.boxed(-1, -1, 4, 4, Cell::from_char('#'));
        // Visible part: the right column x=2 and the bottom row y=2.
        assert_eq!(buffer.get_cell_at(2, 0).unwrap().character, '#');
        assert_eq!(buffer.get_cell_at(2, 2).unwrap().character, '#');
        assert_eq!(buffer.get_cell_at(0, 2).unwrap().character, '#');
        // Interior of the frame stays empty.
        assert_eq!(buffer.get_cell_at(0, 0).unwrap(), Cell::ZERO);
        assert_eq!(buffer.get_cell_at(1, 1).unwrap(), Cell::ZERO);
    }

    #[test]
    fn test_single_row_box() {
        let mut buffer = small();
        let side = Cell::from_char('|');
        let top = Cell::from_char('-');
        let corner = Cell::from_char('+');
        buffer.box_with(0, 0, 4, 1, side, top, corner);
        assert_eq!(buffer.get_string_at(0, 0, 5), "+--+");
    }

    #[test]
    fn test_box_resolves_each_cell() {
        let mut buffer = small();
        buffer.set_current_colors(AnsiColor::Cyan, AnsiColor::Magenta);
        buffer.box_with(
            0,
            0,
            3,
            3,
            Cell::from_char('|'),
            Cell::from_char('-').with_foreground(AnsiColor::Red),
            Cell::from_char('+'),
        );
        assert_eq!(buffer.get_cell_at(0, 1).unwrap().foreground, AnsiColor::Cyan);
        assert_eq!(buffer.get_cell_at(1, 0).unwrap().foreground, AnsiColor::Red);
        assert_eq!(buffer.get_cell_at(0, 0).unwrap().background, AnsiColor::Magenta);
    }

    #[test]
    fn test_horizontal_line() {
        let mut buffer = small();
        buffer.line(3, 1, 4, LineDirection::Horizontal, Cell::from_char('='));
        assert_eq!(buffer.get_string_at(0, 1, 5), "==");
        assert_eq!(buffer.get_cell_at(2, 1).unwrap(), Cell::ZERO);
        assert_eq!(buffer.get_cell_at(0, 2).unwrap(), Cell::ZERO);
    }

    #[test]
    fn test_vertical_line_clipped() {
        let mut buffer = small();
        buffer.line(2, -2, 4, LineDirection::Vertical, Cell::from_char('!'));
        assert_eq!(buffer.get_cell_at(2, 0).unwrap().character, '!');
        assert_eq!(buffer.get_cell_at(2, 1).unwrap().character, '!');
        assert_eq!(buffer.get_cell_at(2, 2).unwrap(), Cell::ZERO);
    }

    #[test]
    fn test_vertical_line_stops_at_bottom() {
        let mut buffer = Buffer::new(5, 3);
        buffer.line(0, 1, 10, LineDirection::Vertical, Cell::from_char('!'));
        assert_eq!(buffer.cells().iter().filter(|c| c.character == '!').count(), 2);
    }

    #[test]
    fn test_text_in_current_colors() {
        let mut buffer = small();
        buffer.set_current_colors(AnsiColor::Blue, AnsiColor::Red);
        buffer.text(0, 1, "Hello");
        assert_eq!(
            buffer.get_cell_at(0, 1).unwrap(),
            Cell::new('H', AnsiColor::Blue, AnsiColor::Red)
        );
        assert_eq!(buffer.get_string_at(0, 1, 5), "Hello");
    }

    #[test]
    fn test_text_truncated_at_row_end() {
        let mut buffer = small();
        buffer.text(2, 2, "wha t");
        assert_eq!(buffer.get_string_at(0, 2, 5), "wha");
        assert_eq!(buffer.get_cell_at(0, 3).unwrap(), Cell::ZERO);
    }

    #[test]
    fn test_text_negative_start() {
        let mut buffer = small();
        buffer.text(-2, 0, "abcd");
        assert_eq!(buffer.get_string_at(0, 0, 5), "cd");
        assert_eq!(buffer.get_cell_at(0, 0).unwrap().character, 'c');
    }

    #[test]
    fn test_text_with_colors() {
        let mut buffer = small();
        buffer.text_with_foreground(0, 0, "a", AnsiColor::Green);
        buffer.text_with_colors(1, 0, "b", AnsiColor::Cyan, AnsiColor::Default);
        assert_eq!(
            buffer.get_cell_at(0, 0).unwrap(),
            Cell::new('a', AnsiColor::Green, AnsiColor::Black)
        );
        assert_eq!(
            buffer.get_cell_at(1, 0).unwrap(),
            Cell::new('b', AnsiColor::Cyan, AnsiColor::Black)
        );
    }

    #[test]
    fn test_get_string_at_keeps_interior_nul() {
        let mut buffer = small();
        buffer.text(0, 0, "a");
        buffer.text(2, 0, "b");
        assert_eq!(buffer.get_string_at(0, 0, 5), "a\0b");
    }

    #[test]
    fn test_draw_smaller_buffer() {
        let mut buffer = small();
        let mut other = Buffer::new(3, 3);
        other.rectangle(0, 0, 3, 3, RED_ON_BLUE);
        buffer.draw(1, 1, &other);
        for y in 0..5 {
            for x in 0..5 {
                let inside = (1..=3).contains(&x) && (1..=3).contains(&y);
                let expected = if inside { RED_ON_BLUE } else { Cell::ZERO };
                assert_eq!(buffer.get_cell_at(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_draw_transparent_cells() {
        let mut buffer = small();
        buffer.rectangle(0, 0, 5, 5, SOME_CELL);
        let mut other = Buffer::new(2, 1);
        other.cell(0, 0, RED_ON_BLUE);
        buffer.draw(0, 0, &other);
        assert_eq!(buffer.get_cell_at(0, 0).unwrap(), RED_ON_BLUE);
        assert_eq!(buffer.get_cell_at(1, 0).unwrap(), SOME_CELL);
    }

    #[test]
    fn test_draw_clipped_uses_source_width() {
        let mut buffer = small();
        let mut other = Buffer::new(3, 2);
        other.text(0, 0, "abc");
        other.text(0, 1, "def");
        buffer.draw(-1, 4, &other);
        assert_eq!(buffer.get_string_at(0, 4, 5), "bc");
        buffer.draw(3, -1, &other);
        assert_eq!(buffer.get_string_at(3, 0, 2), "de");
    }

    #[test]
    fn test_draw_out_of_bounds_is_noop() {
        let mut buffer = small();
        let mut other = Buffer::new(2, 2);
        other.boxed(0, 0, 2, 2, SOME_CELL);
        buffer.draw(0, 6, &other);
        buffer.draw(-2, 0, &other);
        assert!(all_zero(&buffer));
        assert!(other.cells().iter().all(|cell| *cell == SOME_CELL));
    }

    #[test]
    fn test_out_of_bounds_primitives_are_noops() {
        let mut buffer = small();
        buffer.boxed(0, 0, 5, 0, SOME_CELL);
        buffer.boxed(0, 0, -1, 0, SOME_CELL);
        buffer.boxed(5, 5, 2, 2, SOME_CELL);
        buffer.boxed(-2, -2, 2, 2, SOME_CELL);
        buffer.cell(6, 3, SOME_CELL);
        buffer.cell(-1, -1, SOME_CELL);
        buffer.line(-1, -1, 3, LineDirection::Vertical, SOME_CELL);
        buffer.line(0, 6, 3, LineDirection::Horizontal, SOME_CELL);
        buffer.line(2, 1, -2, LineDirection::Horizontal, SOME_CELL);
        buffer.line(1, 1, -2, LineDirection::Vertical, SOME_CELL);
        buffer.rectangle(0, 6, 3, 5, SOME_CELL);
        buffer.rectangle(0, 0, 0, 5, SOME_CELL);
        buffer.rectangle(0, 0, 3, -1, SOME_CELL);
        buffer.text(-1, -1, "hello");
        buffer.text(0, 6, "hello");
        buffer.text(5, 0, "hello");
        buffer.text(-5, 0, "hello");
        assert!(all_zero(&buffer));
    }

    #[test]
    fn test_get_cell_at_out_of_bounds() {
        let buffer = small();
        assert!(matches!(
            buffer.get_cell_at(-1, 0),
            Err(Error::OutOfBounds { x: -1, y: 0 })
        ));
        assert!(buffer.get_cell_at(0, 5).is_err());
    }

    #[test]
    fn test_get_string_at_edges() {
        let mut buffer = small();
        buffer.text(0, 0, "x");
        assert_eq!(buffer.get_string_at(-1, 0, 3), "x");
        assert_eq!(buffer.get_string_at(0, 0, 0), "");
        assert_eq!(buffer.get_string_at(0, 0, -1), "");
        assert_eq!(buffer.get_string_at(-5, 0, 5), "");
        assert_eq!(buffer.get_string_at(0, 7, 5), "");
    }

    #[test]
    fn test_clear() {
        let mut buffer = small();
        buffer.rectangle(0, 0, 5, 5, SOME_CELL);
        buffer.clear();
        assert!(all_zero(&buffer));
    }

    #[test]
    fn test_rows() {
        let mut buffer = Buffer::new(3, 2);
        buffer.text(0, 1, "abc");
        let rows: Vec<&[Cell]> = buffer.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2].character, 'c');
    }
}
