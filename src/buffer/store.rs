//! `CellStore`: The authoritative grid of display cells.
//!
//! Cells are stored contiguously in row-major order, addressed by a
//! single linear index `y * width + x`. The store is a pure data holder:
//! it never tracks damage. Marking cells dirty is the caller's job.

use super::cell::Cell;
use crate::error::{RenderError, Result};

/// A fixed-size grid of cells.
///
/// Access is in row-major order: `index = y * width + x`. Dimensions are
/// fixed for the lifetime of the store.
#[derive(Clone, PartialEq, Eq)]
pub struct CellStore {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl CellStore {
    /// Create a store of `width * height` empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if either dimension is
    /// zero, or [`RenderError::Allocation`] if the storage cannot be
    /// reserved.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let size = usize::from(width) * usize::from(height);
        let mut cells = Vec::new();
        cells.try_reserve_exact(size)?;
        cells.resize(size, Cell::EMPTY);
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Get the store width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the store height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false after construction; present for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub const fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        if index < self.cells.len() {
            let width = usize::from(self.width);
            // Both quotient and remainder are bounded by u16 dimensions.
            Some(((index % width) as u16, (index / width) as u16))
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Get the cell at a linear index.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrite the cell at (x, y).
    ///
    /// Returns the linear index written, or `None` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> Option<usize> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = cell;
        Some(idx)
    }

    /// Overwrite every cell with the same content.
    pub fn fill_all(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Get memory usage in bytes (approximate).
    pub fn memory_usage(&self) -> usize {
        self.cells.len() * std::mem::size_of::<Cell>() + std::mem::size_of::<Self>()
    }
}

impl std::fmt::Debug for CellStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellStore")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("memory_bytes", &self.memory_usage())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;

    #[test]
    fn test_store_new() {
        let store = CellStore::new(80, 24).unwrap();
        assert_eq!(store.width(), 80);
        assert_eq!(store.height(), 24);
        assert_eq!(store.len(), 80 * 24);
        assert!(store.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_store_zero_dimensions() {
        assert!(matches!(
            CellStore::new(0, 24),
            Err(RenderError::InvalidDimensions { width: 0, height: 24 })
        ));
        assert!(matches!(
            CellStore::new(80, 0),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_store_get_set() {
        let mut store = CellStore::new(80, 24).unwrap();
        let cell = Cell::new(b'X', Color::Red, Color::Black);
        assert_eq!(store.set(5, 10, cell), Some(10 * 80 + 5));
        assert_eq!(store.get(5, 10), Some(cell));
        assert_eq!(store.get_index(10 * 80 + 5), Some(cell));
    }

    #[test]
    fn test_store_bounds() {
        let mut store = CellStore::new(80, 24).unwrap();
        assert!(store.get(79, 23).is_some());
        assert!(store.get(80, 23).is_none());
        assert!(store.get(79, 24).is_none());
        assert_eq!(store.set(80, 0, Cell::EMPTY), None);
        assert_eq!(store.get_index(80 * 24), None);
    }

    #[test]
    fn test_store_index_coords() {
        let store = CellStore::new(80, 24).unwrap();
        assert_eq!(store.index_of(5, 10), Some(10 * 80 + 5));
        assert_eq!(store.coords_of(10 * 80 + 5), Some((5, 10)));
        assert_eq!(store.coords_of(80 * 24), None);
    }

    #[test]
    fn test_store_fill_all() {
        let mut store = CellStore::new(5, 3).unwrap();
        let dot = Cell::new(b'.', Color::Black, Color::Black);
        store.fill_all(dot);
        assert!(store.cells().iter().all(|c| *c == dot));
    }

    #[test]
    fn test_store_rows() {
        let mut store = CellStore::new(4, 3).unwrap();
        store.set(0, 2, Cell::new(b'Z', Color::Green, Color::Black));
        let rows: Vec<&[Cell]> = store.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
        assert_eq!(rows[2][0].ch, b'Z');
    }
}
