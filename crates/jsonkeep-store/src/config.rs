//! Store configuration.

/// Configuration for a JSON store.
///
/// Immutable once handed to a store; the store keeps no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Spaces per indentation level in written files.
    pub indent: usize,
    /// Escape every non-ASCII character as `\uXXXX` when writing.
    pub ascii_only: bool,
    /// fsync the temporary file before it replaces the target.
    pub sync: bool,
    /// Suffix given to temporary files.
    pub temp_suffix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            ascii_only: false,
            sync: true,
            temp_suffix: ".tmp".to_string(),
        }
    }
}

impl StoreConfig {
    /// Set the indentation width.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Set whether non-ASCII characters are escaped.
    pub fn ascii_only(mut self, enabled: bool) -> Self {
        self.ascii_only = enabled;
        self
    }

    /// Set whether temporary files are fsynced before the rename.
    pub fn sync(mut self, enabled: bool) -> Self {
        self.sync = enabled;
        self
    }
}
