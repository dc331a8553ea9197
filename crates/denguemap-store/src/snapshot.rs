//! Snapshot reads
//!
//! The map view never patches its aggregate; it re-reads the whole
//! collection and rebuilds from scratch. `fetch_snapshot` returns a
//! `Result` so the rendering layer has to handle the failure branch
//! explicitly instead of leaving a rejected read unobserved.

use crate::error::StoreError;
use crate::port::{Document, DocumentStore};
use chrono::{DateTime, Utc};
use denguemap_core::RawRecord;

/// A complete collection read, taken at one point in time
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Every document in the collection (no ordering guarantee)
    pub documents: Vec<Document>,
    /// When the read completed
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Borrow the raw records inside the snapshot
    pub fn records(&self) -> impl Iterator<Item = &RawRecord> {
        self.documents.iter().map(|doc| &doc.data)
    }

    /// Consume the snapshot into its raw records
    #[must_use]
    pub fn into_records(self) -> Vec<RawRecord> {
        self.documents.into_iter().map(|doc| doc.data).collect()
    }

    /// Number of documents read
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection was empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Read the entire collection.
///
/// # Errors
/// Returns the store's error untouched; surfacing it (banner, retry) is
/// the caller's job.
pub async fn fetch_snapshot(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<Snapshot, StoreError> {
    let documents = store.all_documents(collection).await.map_err(|e| {
        tracing::error!(collection, error = %e, "snapshot fetch failed");
        e
    })?;

    tracing::info!(collection, documents = documents.len(), "snapshot fetched");
    Ok(Snapshot {
        documents,
        fetched_at: Utc::now(),
    })
}
