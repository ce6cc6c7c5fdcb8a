//! Error types for buffer queries and console I/O.
//!
//! Drawing and transform calls never fail: invalid geometry is silently
//! ignored. Only the operations that hand a value back to the caller
//! (`get_cell_at`, `copy`, construction) and the ones that touch a real
//! terminal report errors.

use thiserror::Error;

/// Error type for `ansigrid` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate lies outside the buffer.
    #[error("coordinates out of bounds: ({x}, {y})")]
    OutOfBounds {
        /// The X coordinate.
        x: i32,
        /// The Y coordinate.
        y: i32,
    },

    /// Width or height is zero or negative.
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },

    /// A region is not fully contained in the buffer.
    #[error("region ({x}, {y} {width}x{height}) is not fully in bounds")]
    RegionOutOfBounds {
        /// X coordinate of the region.
        x: i32,
        /// Y coordinate of the region.
        y: i32,
        /// Width of the region.
        width: i32,
        /// Height of the region.
        height: i32,
    },

    /// An I/O error occurred while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
