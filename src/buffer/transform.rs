//! Whole-buffer and region transforms: scroll, flip, rotate, copy.
//!
//! These move existing cells around. None of them resolves colors: cells
//! keep exactly the channels they had.

use super::buffer::Buffer;
use crate::error::{Error, Result};
use crate::layout::Rect;
use tracing::trace;

impl Buffer {
    /// Cyclically shift the whole grid by `dx` columns and `dy` rows.
    ///
    /// Positive values move content right and down; content pushed off one
    /// edge re-enters from the opposite edge. Shifts wrap modulo the buffer
    /// size, so negative values shift left and up.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let width = usize::from(self.width());
        let columns = to_index(dx.rem_euclid(i32::from(self.width())));
        let rows = to_index(dy.rem_euclid(i32::from(self.height())));

        if columns != 0 {
            for row in self.rows_mut() {
                row.rotate_right(columns);
            }
        }
        if rows != 0 {
            self.cells_mut().rotate_right(rows * width);
        }
    }

    /// Mirror the grid left-to-right and/or top-to-bottom.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) {
        let width = usize::from(self.width());
        let height = usize::from(self.height());
        let cells = self.cells_mut();

        if vertical {
            for top in 0..height / 2 {
                let bottom = height - 1 - top;
                let (upper, lower) = cells.split_at_mut(bottom * width);
                upper[top * width..(top + 1) * width].swap_with_slice(&mut lower[..width]);
            }
        }
        if horizontal {
            for row in cells.chunks_exact_mut(width) {
                row.reverse();
            }
        }
    }

    /// Rotate the `size`×`size` square at (x, y) by a quarter turn.
    ///
    /// Does nothing unless the square has a positive size and lies entirely
    /// inside the buffer.
    pub fn rotate(&mut self, x: i32, y: i32, size: i32, clockwise: bool) {
        let snapshot = match self.copy(x, y, size, size) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                trace!(x, y, size, %err, "rotate skipped");
                return;
            }
        };
        let (x, y, size) = (to_index(x), to_index(y), to_index(size));
        let width = usize::from(self.width());
        let cells = self.cells_mut();

        for (source, cell) in snapshot.cells().iter().enumerate() {
            let (i, j) = (source / size, source % size);
            let target = if clockwise {
                (x + size - 1 - i) + (y + j) * width
            } else {
                (x + i) + (y + size - 1 - j) * width
            };
            cells[target] = *cell;
        }
    }

    /// Extract the `width`×`height` region at (x, y) into a new buffer.
    ///
    /// The copy inherits this buffer's current colors. Cells are copied
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a non-positive size and
    /// [`Error::RegionOutOfBounds`] unless the region lies entirely inside
    /// the buffer.
    pub fn copy(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        let region = Rect::new(x, y, width, height);
        if region.is_empty() {
            return Err(Error::InvalidDimensions { width, height });
        }
        if !region.fits_within(self.width(), self.height()) {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        let mut copy = Self::try_new(width, height)?;
        copy.set_current_colors(self.current_foreground(), self.current_background());

        let stride = usize::from(self.width());
        let (x, y, width) = (to_index(x), to_index(y), to_index(width));
        for (row, target) in (y..).zip(copy.rows_mut()) {
            let start = row * stride + x;
            target.copy_from_slice(&self.cells()[start..start + width]);
        }
        Ok(copy)
    }
}

/// Convert a value already validated as non-negative into an index.
#[inline]
fn to_index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}
