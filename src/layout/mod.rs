//! Layout module: Signed rectangles and clipping.
//!
//! Every drawing primitive describes its footprint as a [`Rect`] and asks it
//! how much of that footprint lands inside the grid.

mod rect;

pub use rect::Rect;
