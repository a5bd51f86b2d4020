//! # jsonkeep Core
//!
//! Pure primitives for jsonkeep: documents, Unicode normalization, and the
//! small value types shared by the collaborators.
//!
//! This crate contains no I/O. It is pure computation over JSON values.
//!
//! ## Key Types
//!
//! - [`Document`] - Any JSON-compatible value (`serde_json::Value`)
//! - [`NormalizedString`] - A string guaranteed to be in NFC
//! - [`Entry`] - A dictionary entry
//! - [`DictionaryRecord`] - The on-disk value of a dictionary entry
//!
//! ## Normalization
//!
//! Every string that passes through a store is rewritten to Unicode
//! Normalization Form C, mapping keys included. See [`normalize`] module.

pub mod entry;
pub mod error;
pub mod normalize;
pub mod stats;
pub mod types;

pub use entry::{DictionaryRecord, Entry, Gloss};
pub use error::{CoreError, Result};
pub use normalize::{is_normalized, normalize_document, normalize_in_place, normalize_str};
pub use stats::mean;
pub use types::{Document, DocumentKind, NormalizedString};
