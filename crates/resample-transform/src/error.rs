//! Error types for resample-transform

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] resample_core::Error),

    /// Kernel construction error
    #[error("filter error: {0}")]
    Filter(#[from] resample_filter::FilterError),

    /// Target size with a zero dimension
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
