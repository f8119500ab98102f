//! Bit-per-cell damage tracking.
//!
//! Each cell index owns one bit in a packed byte vector: byte `i >> 3`,
//! bit `i & 7`. Alongside the bits, a running `[first, last]` index range
//! bounds every set bit so a flush only scans the window that was touched.
//!
//! ```text
//! index:   0 1 2 3 4 5 6 7 | 8 9 ...
//! byte 0:  . . X . . . . . | byte 1: X . ...
//!              ^first            ^last
//! ```
//!
//! The range only ever grows between flushes. Clearing a single bit does
//! not shrink it, since that would need a rescan; [`DirtyBitmap::clear_all`]
//! resets it wholesale.

use crate::error::Result;

/// Packed dirty bits plus the coalesced dirty range.
#[derive(Clone, PartialEq, Eq)]
pub struct DirtyBitmap {
    /// One bit per cell, `ceil(len / 8)` bytes.
    bits: Vec<u8>,
    /// Number of tracked cells.
    len: usize,
    /// Lowest possibly-dirty index; `len` when clean.
    first: usize,
    /// Highest possibly-dirty index; 0 when clean.
    last: usize,
}

impl DirtyBitmap {
    /// Create a clean bitmap tracking `len` cells.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Allocation`](crate::RenderError::Allocation)
    /// if the bit storage cannot be reserved.
    pub fn new(len: usize) -> Result<Self> {
        let bytes = len.div_ceil(8);
        let mut bits = Vec::new();
        bits.try_reserve_exact(bytes)?;
        bits.resize(bytes, 0);
        Ok(Self {
            bits,
            len,
            first: len,
            last: 0,
        })
    }

    /// Number of tracked cells.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the bitmap tracks zero cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw bit storage.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Set the bit for `index` and grow the range to include it.
    ///
    /// Returns `true` if the bit was newly set. Indices past the end are
    /// ignored.
    #[inline]
    pub fn mark_dirty(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let mask = 1u8 << (index & 7);
        let byte = &mut self.bits[index >> 3];
        let newly = *byte & mask == 0;
        *byte |= mask;
        self.first = self.first.min(index);
        self.last = self.last.max(index);
        newly
    }

    /// Test the bit for `index`.
    #[inline]
    pub fn is_dirty(&self, index: usize) -> bool {
        index < self.len && self.bits[index >> 3] & (1u8 << (index & 7)) != 0
    }

    /// Clear the bit for `index`. The range is left as is.
    #[inline]
    pub fn clear_dirty(&mut self, index: usize) {
        if index < self.len {
            self.bits[index >> 3] &= !(1u8 << (index & 7));
        }
    }

    /// Zero every bit and reset the range to empty.
    pub fn clear_all(&mut self) {
        self.bits.fill(0);
        self.first = self.len;
        self.last = 0;
    }

    /// Set every bit; the range becomes `[0, len - 1]`.
    pub fn mark_all(&mut self) {
        if self.len == 0 {
            return;
        }
        self.bits.fill(0xff);
        // Keep padding bits in the last byte clear so counts stay exact.
        let tail = self.len & 7;
        if tail != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last = (1u8 << tail) - 1;
            }
        }
        self.first = 0;
        self.last = self.len - 1;
    }

    /// Whether the range is empty (`first > last`).
    #[inline]
    pub const fn is_clean(&self) -> bool {
        self.first > self.last || self.first >= self.len
    }

    /// The inclusive index range that bounds all dirty bits, if any.
    #[inline]
    pub const fn range(&self) -> Option<(usize, usize)> {
        if self.is_clean() {
            None
        } else {
            Some((self.first, self.last))
        }
    }

    /// Number of set bits.
    pub fn dirty_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate the set bits inside the dirty range in ascending order.
    ///
    /// Whole zero bytes are skipped without testing individual bits.
    pub fn iter(&self) -> DirtyIndices<'_> {
        DirtyIndices {
            bits: &self.bits,
            pos: self.first,
            end: if self.is_clean() { self.first } else { self.last + 1 },
        }
    }
}

impl std::fmt::Debug for DirtyBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirtyBitmap")
            .field("len", &self.len)
            .field("range", &self.range())
            .field("dirty", &self.dirty_count())
            .finish()
    }
}

/// Iterator over dirty indices produced by [`DirtyBitmap::iter`].
pub struct DirtyIndices<'a> {
    bits: &'a [u8],
    pos: usize,
    end: usize,
}

impl Iterator for DirtyIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.end {
            let byte = self.bits[self.pos >> 3] >> (self.pos & 7);
            if byte == 0 {
                // Nothing left in this byte; jump to the next boundary.
                self.pos = (self.pos | 7) + 1;
                continue;
            }
            let skip = byte.trailing_zeros() as usize;
            let index = self.pos + skip;
            if index >= self.end {
                self.pos = self.end;
                return None;
            }
            self.pos = index + 1;
            return Some(index);
        }
        None
    }
}
