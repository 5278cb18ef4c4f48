//! Store and Collection facade
//!
//! `Store` hands out named collections, created on first use and mutually
//! isolated. `Collection` is a stateless facade over its document table:
//! it holds only an `Arc` to shared state, so clones are cheap and
//! observe the same documents.

use crate::coordinator::{run_store, StoreReceipt};
use crate::input::StoreInput;
use crate::stream::ResultStream;
use dashmap::DashMap;
use reef_core::{Document, DocumentId, Error, Result};
use reef_engine::DocumentTable;
use std::sync::Arc;
use tracing::debug;

/// Handle to a set of named, mutually isolated document collections
#[derive(Clone, Default)]
pub struct Store {
    collections: Arc<DashMap<String, Arc<DocumentTable>>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection registered under `name`, created on first use.
    ///
    /// The same identifier in two collections names two independent
    /// documents.
    pub fn collection(&self, name: &str) -> Collection {
        let table = self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(target: "reef::store", collection = name, "collection created");
                Arc::new(DocumentTable::new())
            })
            .value()
            .clone();
        Collection {
            name: name.to_string(),
            table,
        }
    }
}

/// One named document collection
#[derive(Clone)]
pub struct Collection {
    name: String,
    table: Arc<DocumentTable>,
}

impl Collection {
    /// Name this collection was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store one document or an ordered batch.
    ///
    /// Mutations are applied eagerly, in input order, before the stream
    /// is returned; dropping the stream does not revert them. On success
    /// the stream yields one receipt per input element, mirroring input
    /// order, then completes. Any failure is whole-call: the stream
    /// carries exactly one terminal error and no items.
    pub fn store(&self, input: impl Into<StoreInput>) -> ResultStream<StoreReceipt> {
        let outcome = run_store(&self.table, input.into());
        if let Err(err) = &outcome {
            debug!(target: "reef::store", collection = %self.name, error = %err, "store failed");
        }
        ResultStream::from_outcome(outcome)
    }

    /// Number of documents currently stored in this collection.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether this collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Point lookup by identifier.
    pub fn find(&self, id: impl Into<DocumentId>) -> FindQuery {
        FindQuery {
            table: Arc::clone(&self.table),
            id: id.into(),
        }
    }

    /// Multi-lookup; result order matches the requested-identifier order.
    pub fn find_all<I, D>(&self, ids: I) -> FindAllQuery
    where
        I: IntoIterator<Item = D>,
        D: Into<DocumentId>,
    {
        FindAllQuery {
            table: Arc::clone(&self.table),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pending single-document lookup
pub struct FindQuery {
    table: Arc<DocumentTable>,
    id: DocumentId,
}

impl FindQuery {
    /// Resolve to the current document, or [`Error::NotFound`].
    ///
    /// The returned copy carries its `id` and `version` fields.
    pub async fn fetch(self) -> Result<Document> {
        self.table.get(&self.id).ok_or(Error::NotFound(self.id))
    }
}

/// Pending multi-document lookup
pub struct FindAllQuery {
    table: Arc<DocumentTable>,
    ids: Vec<DocumentId>,
}

impl FindAllQuery {
    /// Materialize the found documents in requested-identifier order.
    ///
    /// Identifiers with no current document are omitted; duplicates are
    /// each resolved independently. Not-found is not an error here, only
    /// for single-document [`FindQuery::fetch`].
    pub async fn fetch(self) -> Result<Vec<Document>> {
        Ok(self.documents())
    }

    /// Item-at-a-time form of [`fetch`](Self::fetch).
    pub fn stream(self) -> ResultStream<Document> {
        let documents = self.documents();
        ResultStream::from_outcome(Ok(documents))
    }

    fn documents(&self) -> Vec<Document> {
        self.table
            .get_many(self.ids.iter())
            .into_iter()
            .flatten()
            .collect()
    }
}
