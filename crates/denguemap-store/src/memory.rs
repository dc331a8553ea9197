//! In-memory document store
//!
//! Reference backend used by tests and local development. Collections
//! are created lazily on first write; an unknown collection reads back
//! as an empty snapshot, matching how the remote store behaves.

use crate::error::StoreError;
use crate::port::{Document, DocumentStore};
use dashmap::DashMap;
use denguemap_core::{DocId, RawRecord};

/// DashMap-backed store keyed by collection name
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection
    #[must_use]
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map_or(0, |docs| docs.len())
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        data: RawRecord,
    ) -> Result<DocId, StoreError> {
        let document = Document::new(data);
        let id = document.id;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn all_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default())
    }
}
