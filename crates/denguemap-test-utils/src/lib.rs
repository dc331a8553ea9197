//! Testing utilities for the DengueMap workspace
//!
//! Shared fixtures, sample payloads, and a failure-injecting store.

#![allow(missing_docs)]

use denguemap_core::{DocId, RawRecord};
use denguemap_store::{Document, DocumentStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Build a three-field record the way uploads produce them.
pub fn record(region: &str, cases: &str, deaths: &str) -> RawRecord {
    RawRecord::from_pairs([("Region", region), ("cases", cases), ("deaths", deaths)])
}

/// A small CSV payload covering the usual edge cases: whitespace in the
/// region label, a duplicate region, and a non-numeric count.
pub fn sample_csv() -> &'static str {
    "Region,cases,deaths\n Luzon ,100,5\nLuzon,50,3\nVisayas,abc,\n"
}

/// A two-feature GeoJSON collection with opaque geometry.
pub fn boundary_geojson() -> &'static str {
    r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Luzon" },
      "geometry": { "type": "Polygon", "coordinates": [[[120.0, 16.0], [121.0, 16.0], [121.0, 17.0], [120.0, 16.0]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": " Mindanao " },
      "geometry": { "type": "Polygon", "coordinates": [[[124.0, 7.0], [125.0, 7.0], [125.0, 8.0], [124.0, 7.0]]] }
    }
  ]
}"#
}

/// Store wrapper with toggles for rejecting writes and/or reads.
#[derive(Debug)]
pub struct FlakyStore<S> {
    inner: S,
    writes_fail: AtomicBool,
    fetches_fail: AtomicBool,
}

impl<S> FlakyStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            writes_fail: AtomicBool::new(false),
            fetches_fail: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fetches_fail.store(fail, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore> DocumentStore for FlakyStore<S> {
    async fn create_document(
        &self,
        collection: &str,
        data: RawRecord,
    ) -> Result<DocId, StoreError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected("injected failure".to_string()));
        }
        self.inner.create_document(collection, data).await
    }

    async fn all_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        if self.fetches_fail.load(Ordering::SeqCst) {
            return Err(StoreError::FetchFailed("injected failure".to_string()));
        }
        self.inner.all_documents(collection).await
    }
}
