//! Interactive module: A buffer bound to a live console.
//!
//! [`InteractiveConsole`] owns a [`Buffer`](crate::Buffer) and a
//! [`SystemConsole`](crate::terminal::SystemConsole). Drawing goes to the
//! buffer through [`Canvas`](crate::Canvas); `update` pushes a full frame to
//! the console, and `read_text` runs a small line editor on top of it.

mod console;

pub use console::InteractiveConsole;
