//! Dictionary service over the real file store.

use jsonkeep::{
    render_entry, Dictionary, DocumentStore, Entry, ErrorKind, InsertResult, KeepError,
    SafeJsonStore,
};
use jsonkeep_testkit::TestFixture;
use serde_json::json;

fn open(fixture: &TestFixture, name: &str) -> Dictionary<SafeJsonStore> {
    Dictionary::open(fixture.store.clone(), fixture.path(name))
}

#[test]
fn test_lookup_in_missing_file_is_empty() {
    let fixture = TestFixture::new();
    let dict = open(&fixture, "none.json");

    assert!(dict.lookup("omi").unwrap().is_none());
    assert!(dict.words().unwrap().is_empty());
}

#[test]
fn test_add_creates_file_and_directories() {
    let fixture = TestFixture::new();
    let dict = open(&fixture, "data/nested/dict.json");

    let entry =
        Entry::new("omi", "noun", vec!["water".to_string()]).with_example("Omi tut\u{00F9}.");
    assert_eq!(dict.add(entry).unwrap(), InsertResult::Inserted);

    let on_disk = fixture
        .store
        .read(fixture.path("data/nested/dict.json"))
        .unwrap();
    assert_eq!(
        on_disk,
        json!({"omi": {"pos": "noun", "eng": "water", "examples": ["Omi tut\u{00F9}."]}})
    );
    assert!(fixture.leftover_temp_files().is_empty());
}

#[test]
fn test_decomposed_lookup_matches_composed_headword() {
    let fixture = TestFixture::new();
    fixture.write_raw(
        "dict.json",
        "{\"il\\u00e9\": {\"pos\": \"noun\", \"eng\": [\"house\", \"home\"]}}",
    );
    let dict = open(&fixture, "dict.json");

    let entry = dict.lookup("ile\u{0301}").unwrap().unwrap();
    assert_eq!(entry.word, "il\u{00E9}");
    assert_eq!(
        render_entry(&entry),
        "Word: il\u{00E9}\nPOS: noun\nEnglish: house; home\n"
    );
}

#[test]
fn test_replace_keeps_other_entries() {
    let fixture = TestFixture::new();
    let dict = open(&fixture, "dict.json");
    dict.add(Entry::new("il\u{00E9}", "noun", vec!["house".into()])).unwrap();
    dict.add(Entry::new("omi", "noun", vec!["water".into()])).unwrap();

    let result = dict
        .add(Entry::new("il\u{00E9}", "noun", vec!["home".into()]))
        .unwrap();

    assert_eq!(result, InsertResult::Replaced);
    assert_eq!(
        dict.words().unwrap(),
        vec!["il\u{00E9}".to_string(), "omi".to_string()]
    );
    assert_eq!(
        dict.lookup("il\u{00E9}").unwrap().unwrap().meanings,
        vec!["home".to_string()]
    );
}

#[test]
fn test_corrupt_file_names_path() {
    let fixture = TestFixture::new();
    fixture.write_raw("dict.json", "{\"omi\": ");
    let dict = open(&fixture, "dict.json");

    let err = dict.lookup("omi").unwrap_err();
    match &err {
        KeepError::CorruptDictionary { source, .. } => {
            assert_eq!(source.kind(), ErrorKind::DecodeFailure)
        }
        other => panic!("expected CorruptDictionary, got {other:?}"),
    }
    assert!(err.to_string().contains("dict.json"));

    // A failed load never rewrites the file.
    assert!(dict.add(Entry::new("omi", "noun", vec!["water".into()])).is_err());
    assert_eq!(fixture.read_raw("dict.json"), b"{\"omi\": ");
}

#[test]
fn test_non_object_file_is_shape_error() {
    let fixture = TestFixture::new();
    fixture.write_raw("dict.json", "[\"omi\"]");
    let dict = open(&fixture, "dict.json");

    let err = dict.words().unwrap_err();
    assert!(matches!(err, KeepError::Shape { .. }));
    assert!(err.to_string().contains("array"));
}

#[test]
fn test_sample_data_file_loads() {
    let sample = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/dictionary_sample.json");
    let dict = Dictionary::open(SafeJsonStore::default(), sample);

    let words = dict.words().unwrap();
    assert!(!words.is_empty());
    for word in &words {
        assert!(dict.lookup(word).unwrap().is_some(), "missing {word}");
    }
}
