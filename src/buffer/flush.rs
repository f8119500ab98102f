//! Flush engine: turn dirty cells into minimal ANSI output.
//!
//! The scan walks the dirty range of a [`DirtyBitmap`] and, for every set
//! bit, emits:
//! 1. A cursor move, only if the terminal cursor is not already there
//! 2. A combined fg/bg SGR sequence, only if the colors changed
//! 3. The character itself
//!
//! After each character the cached cursor advances one column, so a run
//! of adjacent dirty cells on one row needs a single move, and a run of
//! same-colored cells needs a single color sequence.
//!
//! This module only encodes. Writing the bytes and clearing the bitmap
//! belong to the caller, which can then keep cells dirty when the write
//! fails.

use super::{CellStore, DirtyBitmap};
use crate::terminal::{OutputBuffer, TerminalState};

/// Statistics about a flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Number of cells emitted.
    pub cells_written: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
    /// Total bytes handed to the sink.
    pub bytes_written: usize,
}

impl FlushStats {
    /// Whether nothing was emitted.
    pub const fn is_empty(&self) -> bool {
        self.bytes_written == 0
    }
}

/// Encode every dirty cell of `store` into `output`.
///
/// `replacement` is emitted in place of characters that are not
/// printable ASCII. The bitmap is read, not modified.
pub fn render_dirty(
    store: &CellStore,
    dirty: &DirtyBitmap,
    output: &mut OutputBuffer,
    state: &mut TerminalState,
    replacement: u8,
) -> FlushStats {
    let mut stats = FlushStats::default();
    let start_len = output.len();
    let bright = state.bright();

    for idx in dirty.iter() {
        let (Some(cell), Some((x, y))) = (store.get_index(idx), store.coords_of(idx)) else {
            continue;
        };

        if state.needs_move(x, y) {
            output.cursor_move(x, y);
            state.moved_to(x, y);
            stats.cursor_moves += 1;
        }

        if state.needs_colors(cell.fg, cell.bg) {
            output.set_colors(cell.fg, cell.bg, bright);
            state.colors_set(cell.fg, cell.bg);
            stats.color_changes += 1;
        }

        output.write_byte(if cell.is_printable() { cell.ch } else { replacement });
        state.advance();
        stats.cells_written += 1;
    }

    stats.bytes_written = output.len() - start_len;
    stats
}
