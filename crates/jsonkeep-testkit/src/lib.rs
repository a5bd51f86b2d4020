//! # jsonkeep Testkit
//!
//! Testing utilities for jsonkeep.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known decomposed/composed text pairs for NFC checks
//! - **Generators**: Proptest strategies for documents full of combining marks
//! - **Fixtures**: A temporary directory with a store and inspection helpers
//!
//! ## Golden Vectors
//!
//! ```rust
//! use jsonkeep_testkit::vectors::all_vectors;
//! use jsonkeep_core::normalize_str;
//!
//! for vector in all_vectors() {
//!     assert_eq!(normalize_str(vector.input), vector.expected, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use jsonkeep_testkit::generators::document;
//!
//! proptest! {
//!     #[test]
//!     fn normalization_is_idempotent(doc in document()) {
//!         let once = jsonkeep_core::normalize_document(doc);
//!         prop_assert_eq!(jsonkeep_core::normalize_document(once.clone()), once);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use jsonkeep_testkit::fixtures::TestFixture;
//! use jsonkeep_store::DocumentStore;
//! use serde_json::json;
//!
//! let fixture = TestFixture::new();
//! let path = fixture.path("data.json");
//! fixture.store.write(&path, &json!({"users": []})).unwrap();
//! assert!(fixture.leftover_temp_files().is_empty());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{decomposed_text, document, DocumentParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
