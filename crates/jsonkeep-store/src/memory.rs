//! In-memory implementation of the DocumentStore trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! store (normalization, error taxonomy, indented text) but keeps the
//! serialized text of each path in a map. Paths are compared as given,
//! without resolving them against the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use jsonkeep_core::Document;
use serde::Serialize;

use crate::codec;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::traits::DocumentStore;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: StoreConfig,
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that encodes with `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Store raw text at `path`, bypassing encoding.
    ///
    /// Lets tests plant malformed content.
    pub fn insert_raw(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.into(), contents.into());
    }

    /// The text stored at `path`, if any.
    pub fn raw(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.files.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let bytes = files.get(path).ok_or_else(|| StoreError::NotFound {
            path: path.to_path_buf(),
        })?;
        codec::decode(bytes, path)
    }

    fn write<P, T>(&self, path: P, data: &T) -> Result<()>
    where
        P: AsRef<Path>,
        T: Serialize + ?Sized,
    {
        let path = path.as_ref();
        let doc = codec::to_document(data, path)?;

        let mut buf = Vec::new();
        codec::encode_to(&mut buf, &doc, &self.config)
            .map_err(|e| StoreError::on_write(path, e))?;

        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_path_buf(), buf);
        Ok(())
    }
}
