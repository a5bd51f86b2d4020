//! DocumentStore trait: the abstract interface for JSON document persistence.
//!
//! Collaborators are written against this trait so they can run over the
//! file store in production and the in-memory store in tests.

use std::path::Path;

use jsonkeep_core::Document;
use serde::Serialize;

use crate::error::{ErrorKind, Result};

/// Message reported for a successful write.
pub const WRITE_SUCCESS_MESSAGE: &str = "Data successfully written to file.";

/// The DocumentStore trait: read and write whole documents by path.
///
/// # Design Notes
///
/// - **Normalization**: every string read or written, keys included, is NFC.
/// - **No caching**: each call goes to the backing medium.
/// - **Whole documents**: there is no partial update; a write replaces.
pub trait DocumentStore: Send + Sync {
    /// Read and normalize the document stored at `path`.
    ///
    /// # Returns
    /// - The normalized document.
    /// - `NotFound` if nothing is stored at `path`.
    /// - `Decode` if the stored text is not valid JSON.
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Document>;

    /// Normalize `data` and store it at `path`, replacing what was there.
    ///
    /// On failure the previous content at `path` is left untouched.
    fn write<P, T>(&self, path: P, data: &T) -> Result<()>
    where
        P: AsRef<Path>,
        T: Serialize + ?Sized;
}

/// Extension trait for common store patterns.
pub trait StoreExt: DocumentStore {
    /// Read a document, mapping a missing file to `None`.
    ///
    /// Every other failure is still an error.
    fn read_optional<P: AsRef<Path>>(&self, path: P) -> Result<Option<Document>>;
}

impl<S: DocumentStore + ?Sized> StoreExt for S {
    fn read_optional<P: AsRef<Path>>(&self, path: P) -> Result<Option<Document>> {
        match self.read(path) {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Outcome of a write as a success flag and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Whether the document is now at the target path.
    pub success: bool,
    /// What happened, naming the path and cause on failure.
    pub message: String,
    /// The failure class, if the write failed.
    pub kind: Option<ErrorKind>,
}

impl From<Result<()>> for WriteOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                message: WRITE_SUCCESS_MESSAGE.to_string(),
                kind: None,
            },
            Err(e) => Self {
                success: false,
                message: format!("Error: {}", e),
                kind: Some(e.kind()),
            },
        }
    }
}
