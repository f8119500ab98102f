//! Renderer: the frame buffer aggregate and its public drawing surface.
//!
//! A [`Renderer`] owns the cell grid, the dirty bitmap and the terminal
//! state cache as one unit. Draw calls only touch memory; [`Renderer::flush`]
//! is the single point that scans the damage and performs I/O.
//!
//! Out-of-bounds coordinates are silently ignored by the default draw
//! calls. Callers that want to know use [`Renderer::try_set_cell`] and
//! [`Renderer::try_set_cursor`].

use crate::buffer::flush::{render_dirty, FlushStats};
use crate::buffer::{Cell, CellStore, Color, DirtyBitmap};
use crate::config::RendererConfig;
use crate::error::{RenderError, Result};
use crate::terminal::{ModeFlags, OutputBuffer, TerminalState};
use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;

/// A damage-tracked frame buffer bound to an output sink.
///
/// The sink is any [`Write`]. To keep ownership of a stream (e.g. stdout)
/// outside the renderer, pass `&mut` to it: `&mut W` is itself `Write`.
///
/// ```rust,ignore
/// use dirtycell::{Color, Renderer};
///
/// let mut stdout = std::io::stdout();
/// let mut r = Renderer::new(80, 24, &mut stdout)?;
/// r.clear(b' ', Color::White, Color::Black);
/// r.draw_text(0, 0, "Turn 1", Color::Yellow, Color::Black);
/// r.flush()?;
/// ```
pub struct Renderer<W: Write> {
    /// Authoritative cell contents.
    store: CellStore,
    /// Cells changed since the last successful flush.
    dirty: DirtyBitmap,
    /// What the terminal is believed to show.
    state: TerminalState,
    /// Reusable frame bytes.
    output: OutputBuffer,
    /// Logical write cursor; `None` once it has run past the last cell.
    cursor: Option<(u16, u16)>,
    /// Byte substituted for non-printable characters.
    replacement: u8,
    /// Reset attributes after each frame.
    reset_after_flush: bool,
    /// Destination of all output.
    sink: W,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if a dimension is zero,
    /// or [`RenderError::Allocation`] if storage cannot be reserved.
    pub fn new(width: u16, height: u16, sink: W) -> Result<Self> {
        Self::with_config(width, height, sink, RendererConfig::default())
    }

    /// Create a renderer with custom configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Renderer::new`].
    pub fn with_config(width: u16, height: u16, sink: W, config: RendererConfig) -> Result<Self> {
        let store = CellStore::new(width, height)?;
        let dirty = DirtyBitmap::new(store.len())?;

        let mut modes = ModeFlags::empty();
        modes.set(ModeFlags::BRIGHT_COLORS, config.bright_colors);

        Ok(Self {
            store,
            dirty,
            state: TerminalState::new(modes),
            output: OutputBuffer::with_capacity(config.output_capacity),
            cursor: Some((0, 0)),
            replacement: config.replacement,
            reset_after_flush: config.reset_after_flush,
            sink,
        })
    }

    /// Buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.store.width()
    }

    /// Buffer height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.store.height()
    }

    /// The cell at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.store.get(x, y)
    }

    /// The underlying cell grid.
    #[inline]
    pub const fn store(&self) -> &CellStore {
        &self.store
    }

    /// The underlying dirty bitmap.
    #[inline]
    pub const fn dirty(&self) -> &DirtyBitmap {
        &self.dirty
    }

    /// The terminal state cache.
    #[inline]
    pub const fn terminal_state(&self) -> &TerminalState {
        &self.state
    }

    /// Whether (x, y) has unflushed changes. Out of bounds is never dirty.
    #[inline]
    pub fn is_dirty(&self, x: u16, y: u16) -> bool {
        self.store
            .index_of(x, y)
            .is_some_and(|idx| self.dirty.is_dirty(idx))
    }

    /// Inclusive index range bounding all unflushed changes.
    #[inline]
    pub const fn dirty_range(&self) -> Option<(usize, usize)> {
        self.dirty.range()
    }

    /// Logical write cursor, or `None` once writes have run off the end.
    #[inline]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Whether the bright palette is selected.
    #[inline]
    pub const fn bright_colors(&self) -> bool {
        self.state.bright()
    }

    /// Whether the cursor was hidden via [`Renderer::hide_cursor`].
    #[inline]
    pub const fn cursor_hidden(&self) -> bool {
        self.state.modes().contains(ModeFlags::CURSOR_HIDDEN)
    }

    /// Borrow the sink.
    #[inline]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Mutably borrow the sink.
    ///
    /// Anything written here bypasses the state cache; call
    /// [`Renderer::invalidate`] afterwards if it moves the cursor or
    /// changes colors.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the renderer and return the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    // ------------------------------------------------------------------
    // Draw operations
    // ------------------------------------------------------------------

    /// Fill every cell and mark the whole buffer dirty.
    pub fn clear(&mut self, ch: u8, fg: Color, bg: Color) {
        self.store.fill_all(Cell::new(ch, fg, bg));
        self.dirty.mark_all();
    }

    /// Move the logical cursor. Out-of-bounds positions are ignored.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        if self.store.index_of(x, y).is_some() {
            self.cursor = Some((x, y));
        }
    }

    /// Move the logical cursor, reporting out-of-bounds positions.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutOfBounds`] and leaves the cursor alone.
    pub fn try_set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        if self.store.index_of(x, y).is_none() {
            return Err(RenderError::OutOfBounds { x, y });
        }
        self.cursor = Some((x, y));
        Ok(())
    }

    /// Write at the logical cursor and advance it.
    ///
    /// Past the last column the cursor wraps to column 0 of the next row.
    /// Past the last cell it is parked, and further writes do nothing
    /// until [`Renderer::set_cursor`] is called.
    pub fn write_char(&mut self, ch: u8, fg: Color, bg: Color) {
        let Some((x, y)) = self.cursor else {
            return;
        };
        if let Some(idx) = self.store.set(x, y, Cell::new(ch, fg, bg)) {
            self.dirty.mark_dirty(idx);
        }
        self.cursor = if x + 1 < self.width() {
            Some((x + 1, y))
        } else if y + 1 < self.height() {
            Some((0, y + 1))
        } else {
            None
        };
    }

    /// Write one cell. Out-of-bounds coordinates are ignored.
    pub fn set_cell(&mut self, x: u16, y: u16, ch: u8, fg: Color, bg: Color) {
        if let Some(idx) = self.store.set(x, y, Cell::new(ch, fg, bg)) {
            self.dirty.mark_dirty(idx);
        }
    }

    /// Write one cell, reporting out-of-bounds coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutOfBounds`] without touching the buffer.
    pub fn try_set_cell(&mut self, x: u16, y: u16, ch: u8, fg: Color, bg: Color) -> Result<()> {
        let idx = self
            .store
            .set(x, y, Cell::new(ch, fg, bg))
            .ok_or(RenderError::OutOfBounds { x, y })?;
        self.dirty.mark_dirty(idx);
        Ok(())
    }

    /// Draw a single row of text starting at (x, y).
    ///
    /// Each extended grapheme cluster takes one cell; clusters that are
    /// not a single ASCII byte are drawn as the replacement byte. Text
    /// is clipped at the right edge, never wrapped. Does not move the
    /// logical cursor.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) {
        if y >= self.height() {
            return;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if col >= self.width() {
                break;
            }
            let ch = match grapheme.as_bytes() {
                [b] if b.is_ascii() => *b,
                _ => self.replacement,
            };
            self.set_cell(col, y, ch, fg, bg);
            col += 1;
        }
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Emit every dirty cell to the sink and clear the damage.
    ///
    /// A clean buffer performs no I/O. If the sink fails, every cell stays
    /// dirty for a retry and the state cache is invalidated, since part of
    /// the frame may have reached the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing or flushing the sink fails.
    pub fn flush(&mut self) -> Result<FlushStats> {
        if self.dirty.is_clean() {
            return Ok(FlushStats::default());
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "flush",
            width = self.width(),
            height = self.height(),
            range = ?self.dirty.range()
        )
        .entered();

        self.output.clear();
        let mut stats = render_dirty(
            &self.store,
            &self.dirty,
            &mut self.output,
            &mut self.state,
            self.replacement,
        );
        if stats.cells_written == 0 {
            // Every bit in the range was cleared individually.
            self.dirty.clear_all();
            return Ok(FlushStats::default());
        }
        if self.reset_after_flush {
            self.output.reset_attrs();
            self.state.invalidate_colors();
        }
        stats.bytes_written = self.output.len();

        if let Err(err) = self.output.flush_to(&mut self.sink) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "flush failed, keeping damage for retry");
            self.state.invalidate();
            return Err(err.into());
        }

        self.dirty.clear_all();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            cells = stats.cells_written,
            moves = stats.cursor_moves,
            colors = stats.color_changes,
            bytes = stats.bytes_written,
            "frame flushed"
        );

        Ok(stats)
    }

    /// Show or hide the terminal cursor immediately.
    ///
    /// The terminal state cache (cursor position and colors) is
    /// forgotten afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the sink fails.
    pub fn hide_cursor(&mut self, hide: bool) -> Result<()> {
        self.output.clear();
        if hide {
            self.output.cursor_hide();
        } else {
            self.output.cursor_show();
        }
        self.state.invalidate();
        self.output.flush_to(&mut self.sink)?;
        self.state.set_mode(ModeFlags::CURSOR_HIDDEN, hide);

        #[cfg(feature = "tracing")]
        tracing::debug!(hide, "cursor visibility changed");

        Ok(())
    }

    /// Switch between the normal and bright palette.
    ///
    /// Emits an attribute reset immediately, invalidates the terminal
    /// state cache and marks the whole buffer dirty, so the next flush repaints every
    /// cell in the new palette.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the sink fails. The palette switch
    /// and repaint still take effect.
    pub fn set_bright_colors(&mut self, enable: bool) -> Result<()> {
        self.state.set_mode(ModeFlags::BRIGHT_COLORS, enable);
        self.state.invalidate();
        self.dirty.mark_all();

        #[cfg(feature = "tracing")]
        tracing::debug!(enable, "palette switched, full repaint scheduled");

        self.output.clear();
        self.output.reset_attrs();
        self.output.flush_to(&mut self.sink)?;
        Ok(())
    }

    /// Forget the terminal state cache and mark every cell dirty.
    ///
    /// Use after anything outside the renderer has written to the screen.
    pub fn invalidate(&mut self) {
        self.state.invalidate();
        self.dirty.mark_all();

        #[cfg(feature = "tracing")]
        tracing::debug!("terminal state invalidated");
    }
}

impl<W: Write> std::fmt::Debug for Renderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("store", &self.store)
            .field("dirty", &self.dirty)
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
