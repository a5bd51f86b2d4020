//! Strong type definitions for jsonkeep.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::normalize::normalize_str;

/// A JSON-compatible value: mapping, sequence, string, number, boolean or null.
///
/// No schema is attached. Mapping keys keep their insertion order.
pub type Document = serde_json::Value;

/// The top-level shape of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl DocumentKind {
    /// Classify a document by its top-level variant.
    pub fn of(doc: &Document) -> Self {
        match doc {
            Document::Object(_) => DocumentKind::Object,
            Document::Array(_) => DocumentKind::Array,
            Document::String(_) => DocumentKind::String,
            Document::Number(_) => DocumentKind::Number,
            Document::Bool(_) => DocumentKind::Bool,
            Document::Null => DocumentKind::Null,
        }
    }

    /// Lowercase name, as JSON tooling usually spells it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Object => "object",
            DocumentKind::Array => "array",
            DocumentKind::String => "string",
            DocumentKind::Number => "number",
            DocumentKind::Bool => "boolean",
            DocumentKind::Null => "null",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string in Unicode Normalization Form C.
///
/// Construction always normalizes, so two canonically equivalent inputs
/// produce equal values.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedString(String);

impl NormalizedString {
    /// Normalize `s` to NFC.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(normalize_str(s.as_ref()))
    }

    /// Borrow the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the normalized text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedString({:?})", self.0)
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for NormalizedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NormalizedString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for NormalizedString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<NormalizedString> for String {
    fn from(s: NormalizedString) -> Self {
        s.0
    }
}
