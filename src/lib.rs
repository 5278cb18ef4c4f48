//! ReefDB - in-memory versioned document store
//!
//! ReefDB stores schemaless JSON documents keyed by a string or integer
//! identifier, assigns identifiers when absent, and stamps every write
//! with a per-identifier version. The caller-facing surface is
//! asynchronous: `store` returns an ordered result stream, lookups are
//! fetched.
//!
//! # Quick Start
//!
//! ```ignore
//! use reefdb::Store;
//! use serde_json::json;
//!
//! let store = Store::new();
//! let messages = store.collection("messages");
//!
//! // Store a document (upsert: replaces wholesale if the id exists)
//! let receipts = messages.store(json!({"id": 1, "text": "hi"})).try_collect().await?;
//! assert_eq!(receipts[0].id, 1.into());
//!
//! // Retrieve it
//! let doc = messages.find(1).fetch().await?;
//! ```
//!
//! # Architecture
//!
//! The write path fans each request out through validation and the
//! document table, element by element in input order, and reports
//! per-element receipts or a single whole-call error. Internal layers
//! (core types, store engine) are re-exported through `reef-api`.

// Re-export the public API
pub use reef_api::{Collection, FindAllQuery, FindQuery, ResultStream, Store, StoreInput, StoreReceipt};
pub use reef_core::{Document, DocumentId, Error, Result, Version};
