//! Error types for the store module.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Classification of a store failure.
///
/// Callers branch on this tag rather than on the error's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Target file absent on read.
    NotFound,
    /// File content is not valid JSON.
    DecodeFailure,
    /// Parent directory could not be created.
    DirectoryCreationFailure,
    /// In-memory value has no JSON representation.
    NotSerializable,
    /// The OS rejected the operation on access-control grounds.
    PermissionDenied,
    /// Any other I/O error.
    IoFailure,
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file to read does not exist.
    #[error("the file '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not valid JSON.
    #[error("could not decode JSON from the file '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parent directory of a write target could not be created.
    #[error("could not create directory '{}': {source}", dir.display())]
    DirectoryCreation {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data handed to a write has no JSON representation.
    #[error("data for '{}' is not JSON serializable: {source}", path.display())]
    NotSerializable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Permission denied while reading, creating, writing or replacing.
    #[error("permission denied for '{}': {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O error.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// The taxonomy tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Decode { .. } => ErrorKind::DecodeFailure,
            StoreError::DirectoryCreation { .. } => ErrorKind::DirectoryCreationFailure,
            StoreError::NotSerializable { .. } => ErrorKind::NotSerializable,
            StoreError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            StoreError::Io { .. } => ErrorKind::IoFailure,
        }
    }

    /// The path the failed operation was addressing.
    ///
    /// For directory creation failures this is the directory.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::NotFound { path }
            | StoreError::Decode { path, .. }
            | StoreError::NotSerializable { path, .. }
            | StoreError::PermissionDenied { path, .. }
            | StoreError::Io { path, .. } => path,
            StoreError::DirectoryCreation { dir, .. } => dir,
        }
    }

    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn on_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: path.to_path_buf(),
            },
            _ => Self::on_write(path, err),
        }
    }

    /// Classify an I/O error raised while writing `path`.
    pub(crate) fn on_write(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path, source: err },
            _ => StoreError::Io { path, source: err },
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_classification() {
        let path = Path::new("data/missing.json");

        let err = StoreError::on_read(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "the file 'data/missing.json' was not found");

        let err = StoreError::on_read(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        let err = StoreError::on_read(path, io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.to_string().contains("disk on fire"));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_write_never_reports_not_found() {
        let err = StoreError::on_write(
            Path::new("gone/x.json"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_directory_creation_names_directory() {
        let err = StoreError::DirectoryCreation {
            dir: PathBuf::from("a/b/c"),
            source: io::Error::new(io::ErrorKind::Other, "read-only filesystem"),
        };
        assert_eq!(err.kind(), ErrorKind::DirectoryCreationFailure);
        assert_eq!(err.path(), Path::new("a/b/c"));
        assert_eq!(
            err.to_string(),
            "could not create directory 'a/b/c': read-only filesystem"
        );
    }
}
