//! # Dirtycell
//!
//! A damage-tracked terminal frame buffer for the 8-color (and bright
//! 16-color) ANSI palette.
//!
//! Instead of repainting the whole grid every frame, dirtycell records
//! which cells changed in a packed bit-per-cell bitmap and flushes only
//! those, skipping cursor moves and color changes the terminal already
//! has.
//!
//! ## Core Concepts
//!
//! - **Cell store**: a row-major grid of `(byte, fg, bg)` cells
//! - **Dirty bitmap**: one bit per cell plus a `[first, last]` damage range
//! - **Terminal state cache**: last cursor position and colors emitted
//! - **Single-write flush**: each frame is assembled, then written once
//!
//! ## Example
//!
//! ```rust,ignore
//! use dirtycell::{Color, Renderer};
//!
//! let mut stdout = std::io::stdout();
//! let mut screen = Renderer::new(5, 3, &mut stdout)?;
//! screen.clear(b'.', Color::Black, Color::Black);
//! screen.flush()?;
//!
//! screen.set_cell(2, 1, b'X', Color::Red, Color::Black);
//! screen.flush()?; // emits one move, one color, one byte
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod renderer;
pub mod terminal;

// Re-exports for convenience
pub use buffer::flush::FlushStats;
pub use buffer::{Cell, CellStore, Color, DirtyBitmap};
pub use config::RendererConfig;
pub use error::{RenderError, Result};
pub use renderer::Renderer;
pub use terminal::{ModeFlags, OutputBuffer, TerminalSession, TerminalState};
