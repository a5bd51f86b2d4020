//! Error types for jsonkeep Core.

use thiserror::Error;

/// Core errors that can occur in the pure helpers.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("cannot compute the mean of an empty sample")]
    EmptySample,

    #[error("malformed dictionary record for {word:?}: {reason}")]
    MalformedRecord { word: String, reason: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
