//! I/O error types
//!
//! Provides a unified error type for raw frame ingestion so that callers
//! only need to handle one error type.

use thiserror::Error;

/// Error type for raw frame I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The frame data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. zero dimensions)
    #[error("core error: {0}")]
    Core(#[from] resample_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
