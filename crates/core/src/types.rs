//! Identifier and version types
//!
//! This module defines the two reserved-field value types:
//! - DocumentId: unique identifier of a document within a table
//! - Version: opaque stamp distinguishing successive states of one identifier

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a stored document
///
/// Callers may supply either a string or an integer identifier; generated
/// identifiers are always strings. Serializes untagged so `{"id": 1}` and
/// `{"id": "abc"}` both round-trip with their original JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    /// Caller-supplied or generated string identifier
    String(String),
    /// Caller-supplied integer identifier
    Int(i64),
}

impl DocumentId {
    /// Interpret a JSON value as an identifier.
    ///
    /// Only strings and integers are valid identifiers; any other JSON
    /// type is rejected upstream with [`Error::InvalidId`](crate::Error).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(DocumentId::String(s.clone())),
            Value::Number(n) => n.as_i64().map(DocumentId::Int),
            _ => None,
        }
    }

    /// The JSON form of this identifier, preserving its original type.
    pub fn to_value(&self) -> Value {
        match self {
            DocumentId::String(s) => Value::String(s.clone()),
            DocumentId::Int(n) => Value::from(*n),
        }
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::String(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId::String(s)
    }
}

impl From<i64> for DocumentId {
    fn from(n: i64) -> Self {
        DocumentId::Int(n)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::String(s) => write!(f, "{}", s),
            DocumentId::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Opaque version stamp for one identifier
///
/// The table assigns a version on every successful write. Successive
/// states of the same identifier carry strictly increasing versions;
/// callers treat the stamp as opaque and strip it before comparing
/// document bodies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Version(u64);

impl Version {
    /// Version assigned to the first revision of an identifier
    pub const FIRST: Version = Version(1);

    /// Build a version from its raw counter value
    pub fn new(n: u64) -> Self {
        Version(n)
    }

    /// The version that strictly succeeds this one
    pub fn next(self) -> Version {
        Version(self.0 + 1)
    }

    /// Raw counter value
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
