//! Terminal module: Output buffering, key input, and the console abstraction.
//!
//! This module contains:
//! - [`OutputBuffer`]: Accumulates a frame of ANSI bytes for a single write
//! - [`SystemConsole`]: The terminal interface the interactive console drives
//! - [`CrosstermConsole`]: The real terminal backend
//! - [`CrlfWriter`]: Restores carriage returns on raw-mode output
//! - [`KeyInfo`], [`KeyCode`], [`KeyModifiers`]: Key press types

mod console;
mod crlf;
mod keys;
mod output;

pub use console::{CrosstermConsole, SystemConsole};
pub use crlf::CrlfWriter;
pub use keys::{KeyCode, KeyInfo, KeyModifiers};
pub use output::OutputBuffer;
