//! # jsonkeep Store
//!
//! Safe JSON persistence. Provides a trait-based interface for reading and
//! writing whole JSON documents, with an atomic file implementation and an
//! in-memory implementation.
//!
//! ## Overview
//!
//! The store module abstracts document storage behind the [`DocumentStore`]
//! trait. The primary implementation is [`SafeJsonStore`], with
//! [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`DocumentStore`] - The trait for all storage operations
//! - [`SafeJsonStore`] - Atomic file-backed storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`StoreConfig`] - Indentation, escaping and durability settings
//! - [`StoreError`] / [`ErrorKind`] - What went wrong, and its class
//! - [`WriteOutcome`] - A write result as a success flag and message
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jsonkeep_store::{read_json, write_json_safely, ErrorKind};
//! use serde_json::json;
//!
//! write_json_safely("data/users.json", &json!({"users": [{"id": 1, "name": "Alice"}]})).unwrap();
//!
//! match read_json("data/users.json") {
//!     Ok(doc) => println!("{}", doc),
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("no data yet"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Atomic replace**: writes land in a temporary file in the target's
//!   directory and are renamed over the target
//! - **Guaranteed cleanup**: the temporary file is removed on every exit path
//! - **NFC everywhere**: strings and keys are normalized on read and write
//! - **No schema**: any JSON value is accepted

mod codec;
pub mod config;
pub mod error;
pub mod file;
mod finite;
pub mod memory;
pub mod traits;

pub use config::StoreConfig;
pub use error::{ErrorKind, Result, StoreError};
pub use file::{read_json, write_json_safely, SafeJsonStore};
pub use memory::MemoryStore;
pub use traits::{DocumentStore, StoreExt, WriteOutcome, WRITE_SUCCESS_MESSAGE};
