//! Document representation
//!
//! A document is an open (schemaless) mapping from field name to JSON
//! value with two reserved fields:
//!
//! - `id`: string or integer identifier, immutable once assigned
//! - `version`: stamp assigned by the table on every successful write,
//!   never supplied by callers
//!
//! Field values round-trip through storage without loss of type or
//! precision; the table stores the JSON values themselves, not an
//! encoding of them.

use crate::error::{Error, Result};
use crate::types::{DocumentId, Version};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved field holding the document's identifier
pub const ID_FIELD: &str = "id";

/// Reserved field holding the table-assigned version stamp
pub const VERSION_FIELD: &str = "version";

/// An open, schemaless document
///
/// Wraps a JSON object. Apart from the reserved fields, every field is
/// opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Build a document from a caller-supplied JSON object.
    ///
    /// The reserved `id` field, when present, must be a string or an
    /// integer.
    pub fn from_object(fields: Map<String, Value>) -> Result<Self> {
        if let Some(raw) = fields.get(ID_FIELD) {
            if DocumentId::from_value(raw).is_none() {
                return Err(Error::InvalidId(raw.to_string()));
            }
        }
        Ok(Self { fields })
    }

    /// Build a document from fields that are already known to be
    /// well-formed.
    ///
    /// Used by the engine when materializing stored revisions;
    /// [`from_object`](Self::from_object) is the validating entry point
    /// for caller input.
    pub fn from_validated(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The document's identifier, if one is present.
    pub fn id(&self) -> Option<DocumentId> {
        self.fields.get(ID_FIELD).and_then(DocumentId::from_value)
    }

    /// The table-assigned version stamp, if materialized on this copy.
    pub fn version(&self) -> Option<Version> {
        self.fields
            .get(VERSION_FIELD)
            .and_then(Value::as_u64)
            .map(Version::new)
    }

    /// Value of a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All fields of this document.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document, yielding its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Copy of this document with the version stamp stripped.
    ///
    /// The stamp is opaque, so body comparisons exclude it.
    pub fn without_version(&self) -> Document {
        let mut fields = self.fields.clone();
        fields.remove(VERSION_FIELD);
        Document { fields }
    }
}
