//! Error types for the jsonkeep tools.

use std::path::PathBuf;

use jsonkeep_core::{CoreError, DocumentKind};
use jsonkeep_store::StoreError;
use thiserror::Error;

/// Errors that can occur in the dictionary and summarizer tools.
#[derive(Debug, Error)]
pub enum KeepError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Core error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The dictionary file exists but cannot be decoded.
    #[error("corrupt dictionary at '{}': {source}", path.display())]
    CorruptDictionary {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    /// The dictionary document has the wrong top-level shape.
    #[error("dictionary at '{}' must be a JSON object of entries, found {found}", path.display())]
    Shape { path: PathBuf, found: DocumentKind },

    /// Logging could not be initialized.
    #[error("logging initialization failed: {0}")]
    Logging(String),
}

/// Result type for jsonkeep tool operations.
pub type Result<T> = std::result::Result<T, KeepError>;
