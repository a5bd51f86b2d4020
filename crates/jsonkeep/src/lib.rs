//! # jsonkeep
//!
//! The unified API for jsonkeep: safe JSON persistence plus the small tools
//! built on it.
//!
//! ## Overview
//!
//! - **Store**: read and atomically write JSON documents, NFC-normalized
//! - **Dictionary**: headword lookup over a JSON dictionary file
//! - **Summarizer**: placeholder truncating summarizer
//! - **Logging**: `tracing` subscriber setup for the binaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jsonkeep::{Dictionary, Entry, SafeJsonStore};
//!
//! let dict = Dictionary::open(SafeJsonStore::default(), "data/dictionary_sample.json");
//! dict.add(Entry::new("ilé", "noun", vec!["house".to_string()])).unwrap();
//!
//! if let Some(entry) = dict.lookup("ilé").unwrap() {
//!     println!("{}", jsonkeep::render_entry(&entry));
//! }
//! ```
//!
//! ## Binaries
//!
//! - `dictionary-cli lookup <word>` / `dictionary-cli add <word> ...`
//! - `summarizer-cli [TEXT]`
//!
//! ## Re-exports
//!
//! - `jsonkeep::core` - Documents, normalization, entries, mean
//! - `jsonkeep::store` - Storage abstraction and the atomic file store

pub mod dictionary;
pub mod error;
pub mod logging;
pub mod summarize;

// Re-export component crates
pub use jsonkeep_core as core;
pub use jsonkeep_store as store;

// Re-export main types for convenience
pub use dictionary::{render_entry, Dictionary, InsertResult, DEFAULT_DATA_FILE};
pub use error::{KeepError, Result};
pub use summarize::{summarize, DEFAULT_SUMMARY_CHARS};

// Re-export commonly used component types
pub use jsonkeep_core::{mean, Document, Entry, NormalizedString};
pub use jsonkeep_store::{
    read_json, write_json_safely, DocumentStore, ErrorKind, MemoryStore, SafeJsonStore,
    StoreConfig, StoreError, WriteOutcome,
};
