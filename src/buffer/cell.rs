//! Cell: The atomic unit of terminal display.
//!
//! # Memory Layout
//!
//! A `Cell` is three bytes: the character byte and one palette index per
//! color. A 200x50 grid therefore fits in under 30KB.
//!
//! ```text
//! ┌──────────┬──────────┬──────────┐
//! │    ch    │    fg    │    bg    │
//! │    u8    │  Color   │  Color   │
//! └──────────┴──────────┴──────────┘
//! ```

/// One of the eight base terminal colors.
///
/// The discriminant is the palette index used by SGR sequences: the
/// foreground code is `30 + index` (or `90 + index` in bright mode) and
/// the background code is `40 + index` (or `100 + index`).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Palette index 0.
    #[default]
    Black = 0,
    /// Palette index 1.
    Red = 1,
    /// Palette index 2.
    Green = 2,
    /// Palette index 3.
    Yellow = 3,
    /// Palette index 4.
    Blue = 4,
    /// Palette index 5.
    Magenta = 5,
    /// Palette index 6.
    Cyan = 6,
    /// Palette index 7.
    White = 7,
}

impl Color {
    /// All colors in palette order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Palette index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a color by palette index.
    ///
    /// Returns `None` for indices above 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// SGR foreground code for this color.
    #[inline]
    pub const fn fg_code(self, bright: bool) -> u8 {
        if bright {
            90 + self.index()
        } else {
            30 + self.index()
        }
    }

    /// SGR background code for this color.
    #[inline]
    pub const fn bg_code(self, bright: bool) -> u8 {
        if bright {
            100 + self.index()
        } else {
            40 + self.index()
        }
    }
}

/// A single character-sized terminal position.
///
/// Cells have no identity of their own; they are slots in a
/// [`CellStore`](super::CellStore) addressed by linear index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character byte.
    pub ch: u8,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A space in white on black.
    pub const EMPTY: Self = Self::new(b' ', Color::White, Color::Black);

    /// Create a new cell.
    #[inline]
    pub const fn new(ch: u8, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }

    /// Builder: replace the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: replace the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Whether the character byte can be sent to a terminal as-is.
    ///
    /// Only printable ASCII (0x20..=0x7E) qualifies.
    #[inline]
    pub const fn is_printable(&self) -> bool {
        matches!(self.ch, 0x20..=0x7e)
    }
}
