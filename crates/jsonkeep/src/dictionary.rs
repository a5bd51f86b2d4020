//! Dictionary lookup over a JSON dictionary file.
//!
//! The dictionary is a single document mapping headwords to records. It is
//! re-read on every call; nothing is cached between lookups.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonkeep_core::{Document, DocumentKind, Entry, NormalizedString};
use jsonkeep_store::{DocumentStore, ErrorKind, StoreExt};
use serde_json::Map;
use tracing::{debug, info};

use crate::error::{KeepError, Result};

/// Dictionary file used when none is given.
pub const DEFAULT_DATA_FILE: &str = "data/dictionary_sample.json";

/// Result of adding an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// The headword was new.
    Inserted,
    /// An entry with the same headword was overwritten.
    Replaced,
}

/// A dictionary stored as one JSON document.
pub struct Dictionary<S: DocumentStore> {
    store: S,
    path: PathBuf,
}

impl<S: DocumentStore> Dictionary<S> {
    /// Use the dictionary document at `path` in `store`.
    ///
    /// The file need not exist yet.
    pub fn open(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    /// Path of the dictionary document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up `word`.
    ///
    /// Composed and decomposed spellings of the same word match. A headword
    /// whose record is blank (`null`, `{}`, `[]` or `""`) counts as absent.
    pub fn lookup(&self, word: &str) -> Result<Option<Entry>> {
        let key = NormalizedString::new(word);
        let entries = self.load()?;

        match entries.get(key.as_str()) {
            Some(value) if !is_blank(value) => {
                Ok(Some(Entry::from_document(&key, value)?))
            }
            _ => {
                debug!(word = %key, "no dictionary entry");
                Ok(None)
            }
        }
    }

    /// All headwords, in file order.
    pub fn words(&self) -> Result<Vec<String>> {
        Ok(self.load()?.keys().cloned().collect())
    }

    /// Add `entry`, replacing any entry with the same headword.
    ///
    /// The whole dictionary is rewritten atomically.
    pub fn add(&self, entry: Entry) -> Result<InsertResult> {
        let mut entries = self.load()?;
        let (word, record) = entry.into_record();
        let key = NormalizedString::new(&word).into_string();

        let previous = entries.insert(key.clone(), record.to_document());
        self.store.write(&self.path, &Document::Object(entries))?;

        let result = if previous.is_some() {
            InsertResult::Replaced
        } else {
            InsertResult::Inserted
        };
        info!(word = %key, ?result, path = %self.path.display(), "saved dictionary entry");
        Ok(result)
    }

    /// Load the entry map; a missing file is an empty dictionary.
    fn load(&self) -> Result<Map<String, Document>> {
        let doc = match self.store.read_optional(&self.path) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(path = %self.path.display(), "dictionary file missing, treating as empty");
                return Ok(Map::new());
            }
            Err(e) if e.kind() == ErrorKind::DecodeFailure => {
                return Err(KeepError::CorruptDictionary {
                    path: self.path.clone(),
                    source: e,
                });
            }
            Err(e) => return Err(e.into()),
        };

        match doc {
            Document::Object(entries) => Ok(entries),
            other => Err(KeepError::Shape {
                path: self.path.clone(),
                found: DocumentKind::of(&other),
            }),
        }
    }
}

fn is_blank(value: &Document) -> bool {
    match value {
        Document::Null => true,
        Document::Object(map) => map.is_empty(),
        Document::Array(items) => items.is_empty(),
        Document::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render an entry the way `dictionary-cli lookup` prints it.
pub fn render_entry(entry: &Entry) -> String {
    Rendered(entry).to_string()
}

struct Rendered<'a>(&'a Entry);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        writeln!(f, "Word: {}", entry.word)?;
        writeln!(f, "POS: {}", entry.pos.as_deref().unwrap_or("-"))?;
        writeln!(f, "English: {}", entry.english().as_deref().unwrap_or("-"))?;
        if !entry.examples.is_empty() {
            writeln!(f, "Examples:")?;
            for example in &entry.examples {
                writeln!(f, " - {}", example)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonkeep_store::MemoryStore;
    use serde_json::json;

    const PATH: &str = "dict.json";

    fn seeded() -> Dictionary<MemoryStore> {
        let store = MemoryStore::new();
        store
            .write(
                PATH,
                &json!({
                    "ilé": {"pos": "noun", "eng": "house", "examples": ["Ilé mi nìyí."]},
                    "omi": {"pos": "noun", "eng": ["water", "fluid"]}
                }),
            )
            .unwrap();
        Dictionary::open(store, PATH)
    }

    #[test]
    fn test_lookup_found() {
        let dict = seeded();
        let entry = dict.lookup("ilé").unwrap().unwrap();

        assert_eq!(entry.word, "ilé");
        assert_eq!(entry.pos.as_deref(), Some("noun"));
        assert_eq!(entry.meanings, vec!["house"]);
    }

    #[test]
    fn test_lookup_matches_decomposed_spelling() {
        let dict = seeded();
        let entry = dict.lookup("ile\u{0301}").unwrap().unwrap();
        assert_eq!(entry.meanings, vec!["house"]);
    }

    #[test]
    fn test_lookup_missing_word() {
        let dict = seeded();
        assert_eq!(dict.lookup("ajá").unwrap(), None);
    }

    #[test]
    fn test_blank_record_is_no_entry() {
        let store = MemoryStore::new();
        store
            .write(
                PATH,
                &json!({"a": {}, "b": null, "c": [], "d": "", "omi": {"eng": "water"}}),
            )
            .unwrap();
        let dict = Dictionary::open(store, PATH);

        for word in ["a", "b", "c", "d"] {
            assert_eq!(dict.lookup(word).unwrap(), None, "{word}");
        }
        assert!(dict.lookup("omi").unwrap().is_some());
        assert_eq!(dict.words().unwrap().len(), 5);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dict = Dictionary::open(MemoryStore::new(), PATH);
        assert_eq!(dict.lookup("ilé").unwrap(), None);
        assert!(dict.words().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let store = MemoryStore::new();
        store.insert_raw(PATH, "{\"ilé\": ");
        let dict = Dictionary::open(store, PATH);

        let err = dict.lookup("ilé").unwrap_err();
        assert!(matches!(err, KeepError::CorruptDictionary { .. }));
        assert!(err.to_string().starts_with("corrupt dictionary at 'dict.json'"));
    }

    #[test]
    fn test_wrong_shape() {
        let store = MemoryStore::new();
        store.write(PATH, &json!(["ilé", "omi"])).unwrap();
        let dict = Dictionary::open(store, PATH);

        let err = dict.lookup("ilé").unwrap_err();
        assert!(matches!(err, KeepError::Shape { found: DocumentKind::Array, .. }));
    }

    #[test]
    fn test_add_inserts_then_replaces() {
        let dict = seeded();

        let result = dict
            .add(Entry::new("ajá", "noun", vec!["dog".to_string()]))
            .unwrap();
        assert_eq!(result, InsertResult::Inserted);

        let result = dict
            .add(Entry::new("ile\u{0301}", "noun", vec!["home".to_string()]))
            .unwrap();
        assert_eq!(result, InsertResult::Replaced);

        assert_eq!(dict.words().unwrap(), vec!["ilé", "omi", "ajá"]);
        assert_eq!(dict.lookup("ilé").unwrap().unwrap().meanings, vec!["home"]);
    }

    #[test]
    fn test_render_entry() {
        let entry =
            Entry::new("ilé", "noun", vec!["house".to_string()]).with_example("Ilé mi nìyí.");
        assert_eq!(
            render_entry(&entry),
            "Word: ilé\nPOS: noun\nEnglish: house\nExamples:\n - Ilé mi nìyí.\n"
        );

        let multi = Entry::new("lọ", "verb", vec!["go".to_string(), "leave".to_string()])
            .with_example("Mo ń lọ.")
            .with_example("Ó ti lọ.");
        assert_eq!(
            render_entry(&multi),
            "Word: lọ\nPOS: verb\nEnglish: go; leave\nExamples:\n - Mo ń lọ.\n - Ó ti lọ.\n"
        );

        let bare = Entry::from_record("ọ̀rẹ́", Default::default());
        assert_eq!(render_entry(&bare), "Word: ọ̀rẹ́\nPOS: -\nEnglish: -\n");
    }
}
