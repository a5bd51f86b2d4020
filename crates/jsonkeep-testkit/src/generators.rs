//! Proptest generators for property-based testing.
//!
//! Text generators favour decomposed sequences (base letter followed by
//! combining marks) so that normalization has real work to do.

use proptest::prelude::*;
use serde_json::{Map, Number, Value};

use jsonkeep_core::{normalize_document, Document};

/// Combining marks common in tonal orthographies: grave, acute, dot below.
pub const COMBINING_MARKS: [char; 3] = ['\u{0300}', '\u{0301}', '\u{0323}'];

/// Base letters that have precomposed forms with the marks above.
const BASE_LETTERS: &str = "aeiounsAEIOUNS";

/// A single base letter followed by up to two combining marks.
pub fn grapheme() -> impl Strategy<Value = String> {
    (
        prop::sample::select(BASE_LETTERS.chars().collect::<Vec<_>>()),
        prop::collection::vec(prop::sample::select(COMBINING_MARKS.to_vec()), 0..=2),
    )
        .prop_map(|(base, marks)| {
            let mut s = String::with_capacity(1 + marks.len() * 2);
            s.push(base);
            s.extend(marks);
            s
        })
}

/// Text mixing plain ASCII with decomposed graphemes.
pub fn decomposed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => grapheme(),
            1 => "[a-z0-9 _-]{1,4}".prop_map(String::from),
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

/// Numbers that survive a text round trip exactly.
pub fn number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::from),
        any::<u64>().prop_map(Number::from),
        // Quarter steps are exact in binary and print without exponent.
        (-1_000_000i32..1_000_000, 0u8..4).prop_filter_map("non-finite", |(whole, quarter)| {
            Number::from_f64(f64::from(whole) + f64::from(quarter) * 0.25)
        }),
    ]
}

/// A JSON leaf value.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        number().prop_map(Value::Number),
        decomposed_text().prop_map(Value::String),
    ]
}

/// An arbitrary document, nested up to four levels.
pub fn document() -> impl Strategy<Value = Document> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((decomposed_text(), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (key, value) in pairs {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// A document that is already in NFC everywhere.
pub fn nfc_document() -> impl Strategy<Value = Document> {
    document().prop_map(normalize_document)
}

/// Generate a file name.
pub fn file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}\\.json".prop_map(String::from)
}

/// Parameters for a single store write.
#[derive(Debug, Clone)]
pub struct DocumentParams {
    /// Directories between the scratch root and the file; may be empty.
    pub dirs: Vec<String>,
    pub file_name: String,
    pub document: Document,
}

impl DocumentParams {
    /// Path of the target relative to a scratch root.
    pub fn relative_path(&self) -> std::path::PathBuf {
        let mut path: std::path::PathBuf = self.dirs.iter().collect();
        path.push(&self.file_name);
        path
    }
}

impl Arbitrary for DocumentParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec("[a-z]{1,8}".prop_map(String::from), 0..3),
            file_name(),
            document(),
        )
            .prop_map(|(dirs, file_name, document)| DocumentParams {
                dirs,
                file_name,
                document,
            })
            .boxed()
    }
}
