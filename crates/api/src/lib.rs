//! Public API layer for ReefDB
//!
//! This crate provides the caller-facing asynchronous surface over the
//! store engine:
//!
//! - [`Store`]: handle to a set of named, mutually isolated collections
//! - [`Collection`]: `store` / `find` / `find_all` over one collection
//! - [`ResultStream`]: ordered asynchronous result sequence with a single
//!   terminal error channel
//!
//! ## Write path
//!
//! `store` accepts one document or an ordered batch. Every element is
//! validated and written eagerly, in input order; the returned stream
//! yields one receipt per element in the same order. Any element failure
//! fails the whole call: the stream then carries exactly one terminal
//! error and no items, though earlier elements of the batch may already
//! have been written (no rollback).
//!
//! ## Quick start
//!
//! ```ignore
//! use reef_api::Store;
//! use serde_json::json;
//!
//! let store = Store::new();
//! let messages = store.collection("messages");
//!
//! let receipts = messages.store(json!({"id": 1, "text": "hi"})).try_collect().await?;
//! let doc = messages.find(1).fetch().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod coordinator;
pub mod input;
pub mod stream;

pub use collection::{Collection, FindAllQuery, FindQuery, Store};
pub use coordinator::StoreReceipt;
pub use input::StoreInput;
pub use stream::ResultStream;
