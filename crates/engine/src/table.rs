//! DocumentTable: the authoritative identifier -> document mapping
//!
//! Backed by DashMap: lock-free reads, per-key atomic writes through the
//! entry API. An upsert for a given identifier is atomic relative to
//! other upserts on the same identifier, and the version it assigns
//! strictly succeeds the version it replaces. There is no cross-key
//! locking discipline; independent identifiers never contend.
//!
//! Callers only ever observe copies: every read clones the stored fields
//! before handing them out.

use crate::ids::{GenerateId, UuidGenerator};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reef_core::{Document, DocumentId, Version, ID_FIELD, VERSION_FIELD};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// One stored revision: payload fields plus the current version stamp
///
/// The reserved `id` and `version` fields are kept out of `fields` and
/// materialized on read.
#[derive(Debug, Clone)]
struct StoredDocument {
    fields: Map<String, Value>,
    version: Version,
}

/// The authoritative mapping from identifier to current document revision
///
/// Every stored document has exactly one identifier and exactly one
/// current version at any instant. `upsert` replaces wholesale; there is
/// no merge and no delete.
pub struct DocumentTable {
    docs: DashMap<DocumentId, StoredDocument>,
    ids: Arc<dyn GenerateId>,
}

impl DocumentTable {
    /// Create an empty table with the default UUID identifier generator.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidGenerator))
    }

    /// Create an empty table with a caller-supplied identifier generator.
    pub fn with_generator(ids: Arc<dyn GenerateId>) -> Self {
        Self {
            docs: DashMap::new(),
            ids,
        }
    }

    /// Insert-or-replace a document.
    ///
    /// A document without an `id` field receives a generated identifier.
    /// Replacement is wholesale: no field of the prior revision survives
    /// except the identifier itself. A caller-supplied `version` field is
    /// discarded; the stamp is table-owned. Returns the resulting
    /// identifier and version.
    pub fn upsert(&self, doc: Document) -> (DocumentId, Version) {
        let supplied = doc.id();
        let mut fields = doc.into_fields();
        fields.remove(ID_FIELD);
        fields.remove(VERSION_FIELD);

        match supplied {
            Some(id) => {
                let version = self.put(id.clone(), fields);
                (id, version)
            }
            None => self.insert_generated(fields),
        }
    }

    /// Store under a caller-supplied identifier, bumping the version when
    /// the identifier already holds a document.
    fn put(&self, id: DocumentId, fields: Map<String, Value>) -> Version {
        match self.docs.entry(id.clone()) {
            Entry::Occupied(mut slot) => {
                let version = slot.get().version.next();
                slot.insert(StoredDocument { fields, version });
                debug!(target: "reef::table", id = %id, version = %version, "document replaced");
                version
            }
            Entry::Vacant(slot) => {
                slot.insert(StoredDocument {
                    fields,
                    version: Version::FIRST,
                });
                debug!(target: "reef::table", id = %id, "document created");
                Version::FIRST
            }
        }
    }

    /// Store under a fresh generated identifier, regenerating until the
    /// identifier is vacant.
    fn insert_generated(&self, fields: Map<String, Value>) -> (DocumentId, Version) {
        loop {
            let id = self.ids.generate();
            match self.docs.entry(id.clone()) {
                // Collision with an existing (likely caller-supplied)
                // identifier: try again with a new token.
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(StoredDocument {
                        fields,
                        version: Version::FIRST,
                    });
                    debug!(target: "reef::table", id = %id, "document created with generated id");
                    return (id, Version::FIRST);
                }
            }
        }
    }

    /// Current document for `id`, or `None` if the identifier holds no
    /// document.
    ///
    /// The returned copy has its `id` and `version` fields materialized.
    pub fn get(&self, id: &DocumentId) -> Option<Document> {
        self.docs
            .get(id)
            .map(|entry| Self::materialize(id, entry.value()))
    }

    /// Position-preserving multi-lookup.
    ///
    /// Output order matches the input identifier order; duplicate
    /// identifiers are each resolved independently.
    pub fn get_many<'a, I>(&self, ids: I) -> Vec<Option<Document>>
    where
        I: IntoIterator<Item = &'a DocumentId>,
    {
        ids.into_iter().map(|id| self.get(id)).collect()
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the table holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn materialize(id: &DocumentId, stored: &StoredDocument) -> Document {
        let mut fields = stored.fields.clone();
        fields.insert(ID_FIELD.to_string(), id.to_value());
        fields.insert(
            VERSION_FIELD.to_string(),
            Value::from(stored.version.as_u64()),
        );
        Document::from_validated(fields)
    }
}

impl Default for DocumentTable {
    fn default() -> Self {
        Self::new()
    }
}
