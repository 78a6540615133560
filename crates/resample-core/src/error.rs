//! Error types for resample-core
//!
//! Provides a unified error type for buffer construction and checked
//! access. Each variant captures enough context for diagnostics.
//!
//! Out-of-range reads through the direct accessors are not represented
//! here: they panic, since they indicate a bug in the caller.

use thiserror::Error;

/// Resample core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel store length does not match the declared dimensions
    #[error("size mismatch: expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Coordinates out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
