//! Recursive NFC normalization of JSON documents.
//!
//! Every string in a document is rewritten to Unicode Normalization Form C:
//! - String values at any depth
//! - Mapping keys at any depth
//! - Numbers, booleans and null pass through untouched
//!
//! Normalization is idempotent. When two distinct keys of one mapping
//! normalize to the same text, the merged entry keeps the position of the
//! first key and the value of the last.

use serde_json::Map;
use unicode_normalization::{is_nfc, is_nfc_quick, IsNormalized, UnicodeNormalization};

use crate::types::Document;

/// Normalize a string slice to NFC.
pub fn normalize_str(s: &str) -> String {
    if is_nfc_quick(s.chars()) == IsNormalized::Yes {
        s.to_owned()
    } else {
        s.nfc().collect()
    }
}

/// Normalize an owned string, reusing its buffer when it is already NFC.
fn normalize_owned(s: String) -> String {
    if is_nfc_quick(s.chars()) == IsNormalized::Yes {
        s
    } else {
        s.nfc().collect()
    }
}

/// Normalize every string in `doc`, keys included.
pub fn normalize_document(doc: Document) -> Document {
    match doc {
        Document::Object(map) => Document::Object(normalize_map(map)),
        Document::Array(items) => {
            Document::Array(items.into_iter().map(normalize_document).collect())
        }
        Document::String(s) => Document::String(normalize_owned(s)),
        scalar => scalar,
    }
}

/// Normalize `doc` without moving it out of its owner.
pub fn normalize_in_place(doc: &mut Document) {
    let owned = std::mem::take(doc);
    *doc = normalize_document(owned);
}

/// Check whether every string in `doc` is already NFC.
pub fn is_normalized(doc: &Document) -> bool {
    match doc {
        Document::Object(map) => map.iter().all(|(k, v)| is_nfc(k) && is_normalized(v)),
        Document::Array(items) => items.iter().all(is_normalized),
        Document::String(s) => is_nfc(s),
        _ => true,
    }
}

fn normalize_map(map: Map<String, Document>) -> Map<String, Document> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        // Map::insert keeps the slot of an existing key
        out.insert(normalize_owned(key), normalize_document(value));
    }
    out
}
