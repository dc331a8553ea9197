//! Upload flow
//!
//! Parse, persist, report. Persistence never blocks the table: parsed
//! rows come back in the report for immediate display, and partial
//! write failures downgrade the report rather than failing the upload.

use crate::error::IngestError;
use crate::parse::parse_csv;
use denguemap_core::{DashboardConfig, RawRecord};
use denguemap_store::{append_rows, BatchReport, DocumentStore};
use std::io::Read;

/// Outcome of one upload
#[derive(Debug)]
pub struct UploadReport {
    /// Field names from the header row
    pub fields: Vec<String>,
    /// Rows parsed out of the payload (kept for immediate display)
    pub rows: Vec<RawRecord>,
    /// Per-row persistence outcomes
    pub batch: BatchReport,
}

impl UploadReport {
    /// Rows parsed from the payload
    #[inline]
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.rows.len()
    }

    /// Whether every parsed row was persisted
    #[inline]
    #[must_use]
    pub fn fully_persisted(&self) -> bool {
        self.batch.is_complete()
    }
}

/// Ingest a CSV payload end to end.
///
/// # Workflow
/// 1. Parse the payload against its header row
/// 2. Write every row to the store concurrently
/// 3. Report parsed rows plus per-row write outcomes
///
/// # Errors
/// Only parse/read failures abort the upload. Write failures are
/// recorded in the report; the upload still succeeds overall.
pub async fn upload_csv(
    store: &dyn DocumentStore,
    config: &DashboardConfig,
    payload: impl Read,
) -> Result<UploadReport, IngestError> {
    let upload = parse_csv(payload)?;
    tracing::info!(rows = upload.len(), "csv upload parsed");

    let batch = append_rows(store, &config.collection, upload.rows.clone()).await;
    if !batch.is_complete() {
        tracing::warn!(
            failed = batch.failed,
            parsed = upload.len(),
            "upload persisted partially"
        );
    }

    Ok(UploadReport {
        fields: upload.fields,
        rows: upload.rows,
        batch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use denguemap_store::MemoryStore;
    use denguemap_test_utils::{sample_csv, FlakyStore};

    #[tokio::test]
    async fn upload_lands_every_row() {
        let store = MemoryStore::new();
        let config = DashboardConfig::new();

        let report = upload_csv(&store, &config, sample_csv().as_bytes())
            .await
            .unwrap();

        assert_eq!(report.parsed(), 3);
        assert!(report.fully_persisted());
        assert_eq!(store.document_count(&config.collection), 3);
    }

    #[tokio::test]
    async fn partial_write_failure_does_not_fail_the_upload() {
        let store = FlakyStore::new(MemoryStore::new());
        store.fail_writes(true);
        let config = DashboardConfig::new();

        let report = upload_csv(&store, &config, sample_csv().as_bytes())
            .await
            .unwrap();

        // Parsed rows are still available for immediate display.
        assert_eq!(report.parsed(), 3);
        assert!(!report.fully_persisted());
        assert_eq!(report.batch.failed, 3);
    }

    #[tokio::test]
    async fn malformed_payload_aborts_before_any_write() {
        let store = MemoryStore::new();
        let config = DashboardConfig::new();

        let result = upload_csv(&store, &config, "".as_bytes()).await;

        assert!(result.is_err());
        assert_eq!(store.document_count(&config.collection), 0);
    }

    #[tokio::test]
    async fn upload_respects_configured_collection() {
        let store = MemoryStore::new();
        let config = DashboardConfig::new().with_collection("uploads_2016");

        upload_csv(&store, &config, sample_csv().as_bytes())
            .await
            .unwrap();

        assert_eq!(store.document_count("uploads_2016"), 3);
        assert_eq!(store.document_count("csv_data"), 0);
    }
}
