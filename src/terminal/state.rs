//! Terminal state cache.
//!
//! Tracks what the real terminal is believed to look like (cursor
//! position, last emitted colors, mode switches) so the flush can skip
//! redundant cursor-position and SGR sequences.

use crate::buffer::Color;
use bitflags::bitflags;

bitflags! {
    /// Out-of-band terminal modes set outside the cell-diff path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u8 {
        /// Cursor visibility is off.
        const CURSOR_HIDDEN = 0b0000_0001;
        /// Colors use the bright (90-97 / 100-107) code range.
        const BRIGHT_COLORS = 0b0000_0010;
    }
}

/// What the renderer last told the terminal.
///
/// `None` means unknown: the next flush must emit the sequence
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    /// Physical cursor position (0-indexed).
    cursor: Option<(u16, u16)>,
    /// Last emitted (fg, bg) pair.
    colors: Option<(Color, Color)>,
    /// Current mode switches.
    modes: ModeFlags,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new(ModeFlags::empty())
    }
}

impl TerminalState {
    /// Create a state with unknown cursor and colors.
    pub const fn new(modes: ModeFlags) -> Self {
        Self {
            cursor: None,
            colors: None,
            modes,
        }
    }

    /// Forget everything that was emitted; mode flags are kept.
    pub const fn invalidate(&mut self) {
        self.cursor = None;
        self.colors = None;
    }

    /// Forget the last emitted colors.
    pub const fn invalidate_colors(&mut self) {
        self.colors = None;
    }

    /// Last known physical cursor position.
    #[inline]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Last emitted colors, if the cache is valid.
    #[inline]
    pub const fn colors(&self) -> Option<(Color, Color)> {
        self.colors
    }

    /// Whether the color cache is valid.
    #[inline]
    pub const fn color_cached(&self) -> bool {
        self.colors.is_some()
    }

    /// Current mode switches.
    #[inline]
    pub const fn modes(&self) -> ModeFlags {
        self.modes
    }

    /// Whether bright colors are in effect.
    #[inline]
    pub const fn bright(&self) -> bool {
        self.modes.contains(ModeFlags::BRIGHT_COLORS)
    }

    /// Turn a mode on or off.
    #[inline]
    pub fn set_mode(&mut self, mode: ModeFlags, on: bool) {
        self.modes.set(mode, on);
    }

    /// Whether a cursor move is needed to write at (x, y).
    #[inline]
    pub fn needs_move(&self, x: u16, y: u16) -> bool {
        self.cursor != Some((x, y))
    }

    /// Record that the cursor was positioned at (x, y).
    #[inline]
    pub const fn moved_to(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    /// Record that one character was printed at the cursor.
    ///
    /// Past the last column the terminal is in a pending-wrap state the
    /// cache cannot describe, so the x coordinate simply runs off the
    /// grid and forces a move before the next write.
    #[inline]
    pub const fn advance(&mut self) {
        if let Some((x, y)) = self.cursor {
            self.cursor = Some((x.saturating_add(1), y));
        }
    }

    /// Whether an SGR sequence is needed to draw in (fg, bg).
    #[inline]
    pub fn needs_colors(&self, fg: Color, bg: Color) -> bool {
        self.colors != Some((fg, bg))
    }

    /// Record that (fg, bg) were emitted.
    #[inline]
    pub const fn colors_set(&mut self, fg: Color, bg: Color) {
        self.colors = Some((fg, bg));
    }
}
