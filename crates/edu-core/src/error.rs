//! Error types for moment analysis
//!
//! Provides the error type shared by the numeric layer of edu-stats.

use thiserror::Error;

/// Core error type for moment computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}
