//! Batch coordination for the write path
//!
//! Fans a store request out to validation and the table, element by
//! element in input order. Writes are applied eagerly as each element
//! validates; any element failure escalates to whole-call failure.
//! Earlier writes of the same batch are not rolled back.

use crate::input::{validate_element, StoreInput};
use reef_core::{DocumentId, Result};
use reef_engine::DocumentTable;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one successfully stored document
///
/// Carries the identifier under which the document now lives: the
/// supplied one if the input had an `id` field, the generated one
/// otherwise. Serializes as `{"id": ...}`, the shape the surface reports
/// per element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReceipt {
    /// Identifier of the stored document
    pub id: DocumentId,
}

/// Run a store request against a table.
///
/// On success the receipts correspond positionally to the input elements.
pub(crate) fn run_store(table: &DocumentTable, input: StoreInput) -> Result<Vec<StoreReceipt>> {
    let batch = input.into_batch()?;

    let mut receipts = Vec::with_capacity(batch.len());
    for (position, element) in batch.into_iter().enumerate() {
        let doc = match validate_element(element, position) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(target: "reef::store", position, error = %err, "batch element rejected");
                return Err(err);
            }
        };
        let (id, version) = table.upsert(doc);
        debug!(target: "reef::store", id = %id, version = %version, position, "document stored");
        receipts.push(StoreReceipt { id });
    }
    Ok(receipts)
}
