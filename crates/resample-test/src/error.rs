//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test image
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// Failed to build a synthetic test image
    #[error("failed to build test image: {0}")]
    Build(#[from] resample_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
