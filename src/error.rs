//! Error types.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by renderer operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A dimension was zero.
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },

    /// Cell or bitmap storage could not be allocated.
    #[error("failed to allocate buffer storage: {0}")]
    Allocation(#[from] TryReserveError),

    /// A coordinate fell outside the buffer (strict APIs only).
    #[error("coordinate ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },

    /// Writing to the output sink failed.
    #[error("output sink error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;
