//! # Ansigrid
//!
//! An in-memory terminal cell buffer with clipped drawing primitives and
//! ANSI rendering.
//!
//! Ansigrid keeps a fixed-size grid of character cells, each with an 8-color
//! foreground and background. Drawing calls clip themselves against the grid
//! and never fail; a render pass turns the whole grid into a single ANSI
//! string with redundant color escapes elided.
//!
//! ## Core Concepts
//!
//! - **Default colors**: cells may carry [`AnsiColor::Default`], filled in
//!   from the buffer's current colors when drawn and again when rendered
//! - **Clipping**: partially visible shapes are cut at the grid edge; fully
//!   invisible ones are ignored
//! - **Transforms**: scroll, flip, rotate and copy rearrange existing cells
//! - **Interactive console**: a buffer bound to a terminal, with line input
//!
//! ## Example
//!
//! ```rust
//! use ansigrid::{AnsiColor, Buffer, Cell};
//!
//! let mut buffer = Buffer::new(10, 3);
//! buffer.set_current_foreground(AnsiColor::Green);
//! buffer.boxed(0, 0, 10, 3, Cell::from_char('#'));
//! buffer.text(2, 1, "hello");
//!
//! assert_eq!(buffer.get_string_at(2, 1, 5), "hello");
//! assert!(buffer.to_ansi_string().starts_with("\x1b[1;1H"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod interactive;
pub mod layout;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{render_full, AnsiColor, Buffer, Canvas, Cell, CellGrid, LineDirection, RenderStats};
pub use config::ConsoleConfig;
pub use error::{Error, Result};
pub use interactive::InteractiveConsole;
pub use layout::Rect;
pub use terminal::{CrosstermConsole, KeyCode, KeyInfo, KeyModifiers, OutputBuffer, SystemConsole};
