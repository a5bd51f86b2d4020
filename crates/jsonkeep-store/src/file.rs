//! File-backed implementation of the DocumentStore trait.
//!
//! Writes go through a temporary file created next to the target and are
//! committed with a rename, so readers observe either the old file or the
//! new one and never a torn write.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use jsonkeep_core::Document;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::codec;
use crate::config::StoreConfig;
use crate::error::{ErrorKind, Result, StoreError};
use crate::traits::DocumentStore;

/// Atomic, NFC-normalizing JSON file store.
///
/// Holds only its configuration. Two writers racing on one path are not
/// serialized: the last rename wins.
#[derive(Debug, Clone, Default)]
pub struct SafeJsonStore {
    config: StoreConfig,
}

impl SafeJsonStore {
    /// Create a store with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read_inner(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|e| StoreError::on_read(path, e))?;
        let doc = codec::decode(&bytes, path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Ok(doc)
    }

    fn write_inner<T>(&self, path: &Path, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let dir = parent_dir(path);
        ensure_dir(dir)?;

        // Same directory as the target so the final rename never crosses devices.
        let mut tmp = tempfile::Builder::new()
            .prefix(".")
            .suffix(&self.config.temp_suffix)
            .tempfile_in(dir)
            .map_err(|e| StoreError::on_write(path, e))?;

        // From here on, dropping `tmp` on any exit path deletes the file.
        let doc = codec::to_document(data, path)?;
        self.fill(&mut tmp, &doc).map_err(|e| StoreError::on_write(path, e))?;

        let tmp_path = tmp.path().to_path_buf();
        tmp.persist(path)
            .map_err(|e| StoreError::on_write(path, e.error))?;

        debug!(
            path = %path.display(),
            tmp = %tmp_path.display(),
            "replaced document"
        );
        Ok(())
    }

    fn fill(&self, tmp: &mut NamedTempFile, doc: &Document) -> io::Result<()> {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        codec::encode_to(&mut writer, doc, &self.config)?;
        writer.flush()?;
        drop(writer);

        if self.config.sync {
            tmp.as_file().sync_all()?;
        }
        Ok(())
    }
}

impl DocumentStore for SafeJsonStore {
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        self.read_inner(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                debug!(path = %path.display(), "document not found");
            } else {
                warn!(path = %path.display(), kind = ?e.kind(), "read failed: {}", e);
            }
            e
        })
    }

    fn write<P, T>(&self, path: P, data: &T) -> Result<()>
    where
        P: AsRef<Path>,
        T: Serialize + ?Sized,
    {
        let path = path.as_ref();
        self.write_inner(path, data).map_err(|e| {
            warn!(path = %path.display(), kind = ?e.kind(), "write failed: {}", e);
            e
        })
    }
}

/// Read `path` with the default configuration.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Document> {
    SafeJsonStore::default().read(path)
}

/// Atomically write `data` to `path` with the default configuration.
pub fn write_json_safely<P, T>(path: P, data: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    SafeJsonStore::default().write(path, data)
}

/// Directory that will hold `path`; a bare file name lives in `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| StoreError::DirectoryCreation {
        dir: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "created directory");
    Ok(())
}
