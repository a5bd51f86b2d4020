//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use jsonkeep_store::{SafeJsonStore, StoreConfig};
use tempfile::TempDir;

/// A test fixture with a scratch directory and a file store.
///
/// The directory and everything in it is removed when the fixture drops.
pub struct TestFixture {
    pub dir: TempDir,
    pub store: SafeJsonStore,
}

impl TestFixture {
    /// Create a fixture with the default store configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a fixture whose store uses `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            store: SafeJsonStore::new(config),
        }
    }

    /// Root of the scratch directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `relative` inside the scratch directory.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write raw text to `relative`, bypassing the store.
    pub fn write_raw(&self, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    /// Raw bytes at `relative`.
    pub fn read_raw(&self, relative: impl AsRef<Path>) -> Vec<u8> {
        fs::read(self.path(relative)).expect("failed to read fixture file")
    }

    /// Names of temporary files left anywhere under the scratch directory.
    pub fn leftover_temp_files(&self) -> Vec<String> {
        let suffix = &self.store.config().temp_suffix;
        let mut found = Vec::new();
        collect_files(self.root(), &mut found);
        found
            .into_iter()
            .filter(|name| name.ends_with(suffix.as_str()))
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out);
        } else {
            out.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonkeep_store::DocumentStore;
    use serde_json::json;

    #[test]
    fn test_fixture_paths() {
        let fixture = TestFixture::new();
        let path = fixture.path("a/b.json");
        assert!(path.starts_with(fixture.root()));
        assert!(path.ends_with("a/b.json"));
    }

    #[test]
    fn test_fixture_raw_roundtrip() {
        let fixture = TestFixture::new();
        fixture.write_raw("nested/raw.json", "[1]");
        assert_eq!(fixture.read_raw("nested/raw.json"), b"[1]");
        assert_eq!(fixture.store.read(fixture.path("nested/raw.json")).unwrap(), json!([1]));
    }

    #[test]
    fn test_fixture_finds_temp_files() {
        let fixture = TestFixture::new();
        fixture.write_raw("deep/dir/.stray.tmp", "");
        fixture.write_raw("deep/keep.json", "{}");

        assert_eq!(fixture.leftover_temp_files(), vec![".stray.tmp".to_string()]);
    }
}
