//! Core types for ReefDB
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId: string or integer identifier of a stored document
//! - Version: opaque per-identifier version stamp
//! - Document: open, schemaless field map with reserved `id`/`version` fields
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use document::{Document, ID_FIELD, VERSION_FIELD};
pub use error::{Error, Result};
pub use types::{DocumentId, Version};
