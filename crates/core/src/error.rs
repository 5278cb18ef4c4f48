//! Error types for ReefDB
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Message wording is part of the public contract: callers match on
//! substrings such as "must be an object", "must be non-null",
//! "must be defined" and "must receive exactly 1 argument".

use crate::types::DocumentId;
use thiserror::Error;

/// Result type alias for ReefDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the document store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `store` invoked with no argument at all
    #[error("store must receive exactly 1 argument")]
    MissingArgument,

    /// `store` invoked with an explicitly undefined argument
    #[error("The 1st argument to store must be defined")]
    UndefinedArgument,

    /// `store` invoked with null as the whole argument
    #[error("The argument to store must be non-null")]
    NullArgument,

    /// A batch element was not a non-null JSON object
    #[error("The element at index {position} in the argument to store must be an object")]
    NotAnObject {
        /// Zero-based position of the offending element in the input batch
        position: usize,
    },

    /// The reserved `id` field held a value that is neither string nor integer
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// Lookup for an identifier with no current document
    #[error("document not found: {0}")]
    NotFound(DocumentId),
}
