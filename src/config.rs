//! Renderer configuration.

/// Configuration for a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Start with the bright palette selected.
    pub bright_colors: bool,
    /// Bytes pre-allocated for one frame of output.
    pub output_capacity: usize,
    /// Byte emitted in place of non-printable cell characters.
    pub replacement: u8,
    /// Append an attribute reset after every non-empty frame.
    pub reset_after_flush: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            bright_colors: false,
            output_capacity: 4096,
            replacement: b'?',
            reset_after_flush: false,
        }
    }
}

impl RendererConfig {
    /// Builder: initial palette variant.
    #[must_use]
    pub const fn with_bright_colors(mut self, bright: bool) -> Self {
        self.bright_colors = bright;
        self
    }

    /// Builder: output buffer capacity.
    #[must_use]
    pub const fn with_output_capacity(mut self, capacity: usize) -> Self {
        self.output_capacity = capacity;
        self
    }

    /// Builder: replacement byte for non-printable characters.
    ///
    /// A non-printable replacement would defeat its purpose, so anything
    /// outside printable ASCII falls back to `?`.
    #[must_use]
    pub const fn with_replacement(mut self, replacement: u8) -> Self {
        self.replacement = if matches!(replacement, 0x20..=0x7e) {
            replacement
        } else {
            b'?'
        };
        self
    }

    /// Builder: reset attributes at the end of each frame.
    #[must_use]
    pub const fn with_reset_after_flush(mut self, reset: bool) -> Self {
        self.reset_after_flush = reset;
        self
    }
}
