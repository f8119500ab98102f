//! Buffer module: Core data structures for damage-tracked rendering.
//!
//! This module contains:
//! - [`Cell`]: One character position with an 8-color fg/bg pair
//! - [`CellStore`]: The row-major grid of cells
//! - [`DirtyBitmap`]: Packed bit-per-cell damage tracking
//! - [`flush`]: Encoding of dirty cells into minimal ANSI sequences

mod cell;
mod dirty;
pub mod flush;
mod store;

pub use cell::{Cell, Color};
pub use dirty::{DirtyBitmap, DirtyIndices};
pub use store::CellStore;
