//! Buffer module: The cell grid and everything that draws on it.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of the grid
//! - [`AnsiColor`]: The eight basic colors plus a `Default` sentinel
//! - [`Buffer`]: A grid of cells with clipped drawing primitives
//! - [`CellGrid`] and [`Canvas`]: Traits shared by buffers and consoles
//! - [`render`]: Full-frame ANSI rendering with color elision
//!
//! Scroll, flip, rotate and copy live on [`Buffer`] as well.

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
mod grid;
pub mod render;
mod transform;

pub use buffer::{Buffer, LineDirection};
pub use cell::{AnsiColor, Cell};
pub use grid::{Canvas, CellGrid};
pub use render::{render_full, RenderStats};
