//! Store argument normalization and validation
//!
//! The wire surface this API abstracts distinguishes three degenerate
//! call shapes, each with its own contractual error message: a call with
//! no argument at all, a call whose argument slot is explicitly
//! undefined, and a null argument. JSON alone cannot carry that
//! distinction, so [`StoreInput`] keeps the shapes explicit.
//!
//! Call-shape errors are fatal to the whole call and are raised before
//! any per-element processing; a call-shape failure never produces a
//! partial item sequence.

use reef_core::{Document, Error, Result};
use serde_json::Value;

/// The argument of one `store` call
#[derive(Debug, Clone, PartialEq)]
pub enum StoreInput {
    /// Call made with no argument at all
    Missing,
    /// Argument slot present but carrying no value
    Undefined,
    /// A single document (or null, which is rejected)
    Single(Value),
    /// An ordered batch of documents
    Batch(Vec<Value>),
}

impl StoreInput {
    /// Normalize into an ordered batch, raising call-shape errors.
    ///
    /// A bare document becomes a batch of one; an array is used as-is.
    pub(crate) fn into_batch(self) -> Result<Vec<Value>> {
        match self {
            StoreInput::Missing => Err(Error::MissingArgument),
            StoreInput::Undefined => Err(Error::UndefinedArgument),
            StoreInput::Single(Value::Null) => Err(Error::NullArgument),
            StoreInput::Single(value) => Ok(vec![value]),
            StoreInput::Batch(values) => Ok(values),
        }
    }
}

impl From<Value> for StoreInput {
    /// JSON arrays are batches; everything else is a single argument.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => StoreInput::Batch(values),
            other => StoreInput::Single(other),
        }
    }
}

impl From<Vec<Value>> for StoreInput {
    fn from(values: Vec<Value>) -> Self {
        StoreInput::Batch(values)
    }
}

/// Validate one batch element: a non-null JSON object with a well-formed
/// `id` field. Pure check, no side effects.
pub(crate) fn validate_element(value: Value, position: usize) -> Result<Document> {
    match value {
        Value::Object(fields) => Document::from_object(fields),
        _ => Err(Error::NotAnObject { position }),
    }
}
