//! Document-store port
//!
//! The remote store is an external collaborator; the pipeline only ever
//! creates individual documents and reads a whole collection back. No
//! filters, no transactions, no schema enforcement - any string-keyed
//! record is accepted per document.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use denguemap_core::{DocId, RawRecord};
use serde::{Deserialize, Serialize};

/// One persisted record, as the store hands it back.
///
/// `id` is assigned by the store at write time and never derived from
/// record content, so re-uploading a region accumulates documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identity
    pub id: DocId,
    /// The record as uploaded, verbatim
    pub data: RawRecord,
    /// When the store accepted the write
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Wrap a record as a freshly-written document
    #[must_use]
    pub fn new(data: RawRecord) -> Self {
        Self {
            id: DocId::new(),
            data,
            uploaded_at: Utc::now(),
        }
    }
}

/// Client surface of the remote document store.
///
/// Implementations must tolerate concurrent `create_document` calls;
/// the batch writer issues every row's write at once.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write one record as an independent document
    async fn create_document(
        &self,
        collection: &str,
        data: RawRecord,
    ) -> Result<DocId, StoreError>;

    /// Read the entire collection snapshot (no ordering guarantee)
    async fn all_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}
