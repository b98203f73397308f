//! Error types for word similarity configuration.
//!
//! Scoring itself never fails; only invalid settings are rejected.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, WordSimilarityError>;

/// Errors raised when validating a [`WordSimilarityConfig`](crate::WordSimilarityConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordSimilarityError {
    /// Threshold is NaN, infinite, or outside [0.0, 1.0]
    #[error("threshold must be a finite number in [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// Right padding outside 1..=2
    #[error("right padding must be 1 or 2 blanks, got {0}")]
    InvalidPadding(usize),
}
