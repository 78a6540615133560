//! Error types for resample-filter

use thiserror::Error;

/// Errors that can occur while building or applying kernels
#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
