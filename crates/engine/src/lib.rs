//! Store engine for ReefDB
//!
//! This crate owns document state:
//! - `ids`: generation of fresh document identifiers
//! - `table`: the authoritative identifier -> (fields, version) mapping
//!   with insert-or-replace semantics
//!
//! The engine performs no input validation; the API layer rejects
//! malformed input before it reaches the table.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ids;
pub mod table;

pub use ids::{GenerateId, UuidGenerator};
pub use table::DocumentTable;
