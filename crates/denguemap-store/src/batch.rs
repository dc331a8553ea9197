//! Concurrent batch writes
//!
//! Every row in an upload becomes one independent document write, and
//! all writes go out at once (no ordering, no cap, no rollback). The
//! batch collects a per-row outcome instead of swallowing failures, so
//! the caller owns the partial-failure policy; the batch itself only
//! logs and counts.

use crate::error::StoreError;
use crate::port::DocumentStore;
use denguemap_core::{DocId, RawRecord};
use futures::future::join_all;

/// Result of one row's write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Position of the row in the uploaded batch
    pub index: usize,
    /// Store-assigned id on success, rejection on failure
    pub result: Result<DocId, StoreError>,
}

/// Summary of a whole batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-row outcomes, in upload order
    pub outcomes: Vec<WriteOutcome>,
    /// Rows that landed
    pub written: usize,
    /// Rows whose write was rejected
    pub failed: usize,
}

impl BatchReport {
    /// Whether every row landed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// Indices of rows that failed to persist
    pub fn failed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.index)
    }
}

/// Write a batch of rows, one document per row, all in flight at once.
///
/// Individual failures are logged and recorded in the report; the batch
/// as a whole always completes. Callers that want retry or user-facing
/// failure counts read the report.
pub async fn append_rows(
    store: &dyn DocumentStore,
    collection: &str,
    rows: Vec<RawRecord>,
) -> BatchReport {
    let writes = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| async move {
            let result = store.create_document(collection, row).await;
            WriteOutcome { index, result }
        });

    let outcomes = join_all(writes).await;

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match &outcome.result {
            Ok(_) => report.written += 1,
            Err(e) => {
                tracing::warn!(index = outcome.index, error = %e, "document write failed");
                report.failed += 1;
            }
        }
        report.outcomes.push(outcome);
    }

    tracing::info!(
        collection,
        written = report.written,
        failed = report.failed,
        "batch write finished"
    );
    report
}
