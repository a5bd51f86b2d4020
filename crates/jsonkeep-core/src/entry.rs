//! Dictionary entries.
//!
//! A dictionary file is a JSON mapping from headword to [`DictionaryRecord`]:
//!
//! ```json
//! {
//!     "ilé": { "pos": "noun", "eng": "house", "examples": ["Ilé mi nìyí."] }
//! }
//! ```
//!
//! `eng` may be a single gloss or a list of glosses. Every field is optional.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::fmt;

use crate::error::{CoreError, Result};
use crate::types::Document;

/// English gloss as stored on disk: one string or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gloss {
    One(String),
    Many(Vec<String>),
}

impl Gloss {
    fn into_meanings(self) -> Vec<String> {
        match self {
            Gloss::One(s) => vec![s],
            Gloss::Many(v) => v,
        }
    }

    fn from_meanings(mut meanings: Vec<String>) -> Option<Self> {
        match meanings.len() {
            0 => None,
            1 => meanings.pop().map(Gloss::One),
            _ => Some(Gloss::Many(meanings)),
        }
    }
}

/// The value stored under a headword in a dictionary file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eng: Option<Gloss>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl DictionaryRecord {
    /// The record as a JSON document, fields in on-disk order.
    pub fn to_document(&self) -> Document {
        let mut map = Map::new();
        if let Some(pos) = &self.pos {
            map.insert("pos".to_string(), Document::String(pos.clone()));
        }
        match &self.eng {
            Some(Gloss::One(gloss)) => {
                map.insert("eng".to_string(), Document::String(gloss.clone()));
            }
            Some(Gloss::Many(glosses)) => {
                map.insert("eng".to_string(), strings(glosses));
            }
            None => {}
        }
        if !self.examples.is_empty() {
            map.insert("examples".to_string(), strings(&self.examples));
        }
        Document::Object(map)
    }
}

fn strings(items: &[String]) -> Document {
    Document::Array(items.iter().cloned().map(Document::String).collect())
}

/// A headword with its part of speech, meanings and usage examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub pos: Option<String>,
    pub meanings: Vec<String>,
    pub examples: Vec<String>,
}

impl Entry {
    /// Create an entry with no examples.
    pub fn new(word: impl Into<String>, pos: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            word: word.into(),
            pos: Some(pos.into()),
            meanings,
            examples: Vec::new(),
        }
    }

    /// Add a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Build an entry from its headword and on-disk record.
    pub fn from_record(word: impl Into<String>, record: DictionaryRecord) -> Self {
        Self {
            word: word.into(),
            pos: record.pos,
            meanings: record.eng.map(Gloss::into_meanings).unwrap_or_default(),
            examples: record.examples,
        }
    }

    /// Decode the value stored under `word` in a dictionary document.
    pub fn from_document(word: &str, value: &Document) -> Result<Self> {
        let record: DictionaryRecord =
            serde_json::from_value(value.clone()).map_err(|e| CoreError::MalformedRecord {
                word: word.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_record(word, record))
    }

    /// Split into headword and on-disk record.
    pub fn into_record(self) -> (String, DictionaryRecord) {
        let record = DictionaryRecord {
            pos: self.pos,
            eng: Gloss::from_meanings(self.meanings),
            examples: self.examples,
        };
        (self.word, record)
    }

    /// Meanings joined for single-line display.
    pub fn english(&self) -> Option<String> {
        if self.meanings.is_empty() {
            None
        } else {
            Some(self.meanings.join("; "))
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry(word={:?}, pos={:?}, meanings={:?})",
            self.word,
            self.pos.as_deref().unwrap_or(""),
            self.meanings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_display() {
        let entry = Entry::new(
            "go",
            "verb",
            vec![
                "to proceed in a direction".to_string(),
                "to move towards something".to_string(),
            ],
        );
        assert_eq!(
            entry.to_string(),
            "Entry(word=\"go\", pos=\"verb\", meanings=[\"to proceed in a direction\", \"to move towards something\"])"
        );
    }

    #[test]
    fn test_from_document_single_gloss() {
        let value = json!({"pos": "noun", "eng": "house", "examples": ["Ilé mi nìyí."]});
        let entry = Entry::from_document("ilé", &value).unwrap();

        assert_eq!(entry.word, "ilé");
        assert_eq!(entry.pos.as_deref(), Some("noun"));
        assert_eq!(entry.meanings, vec!["house"]);
        assert_eq!(entry.examples, vec!["Ilé mi nìyí."]);
        assert_eq!(entry.english().as_deref(), Some("house"));
    }

    #[test]
    fn test_from_document_many_glosses_and_missing_fields() {
        let value = json!({"eng": ["water", "fluid"]});
        let entry = Entry::from_document("omi", &value).unwrap();

        assert_eq!(entry.pos, None);
        assert_eq!(entry.meanings, vec!["water", "fluid"]);
        assert!(entry.examples.is_empty());
        assert_eq!(entry.english().as_deref(), Some("water; fluid"));
    }

    #[test]
    fn test_from_document_malformed() {
        let err = Entry::from_document("bad", &json!({"pos": 7})).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { ref word, .. } if word == "bad"));
    }

    #[test]
    fn test_into_record_shapes_gloss() {
        let (word, record) = Entry::new("ọjà", "noun", vec!["market".to_string()]).into_record();
        assert_eq!(word, "ọjà");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"pos": "noun", "eng": "market"})
        );

        let (_, record) = Entry::new("ọjà", "noun", vec![]).into_record();
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"pos": "noun"}));
    }

    #[test]
    fn test_record_to_document_matches_serde() {
        let records = [
            DictionaryRecord::default(),
            Entry::new("omi", "noun", vec!["water".to_string()])
                .with_example("Mo fẹ́ omi.")
                .into_record()
                .1,
            Entry::new("lọ", "verb", vec!["go".to_string(), "leave".to_string()])
                .into_record()
                .1,
        ];

        for record in records {
            assert_eq!(record.to_document(), serde_json::to_value(&record).unwrap());
        }
    }
}
