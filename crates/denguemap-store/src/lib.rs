//! DengueMap Store - Persistence boundary
//!
//! The document-store side of the pipeline:
//! - The `DocumentStore` port (create one document, read them all)
//! - An in-memory reference backend
//! - Concurrent batch writes with per-row outcomes
//! - Snapshot reads that force callers through the failure branch
//!
//! Writes are independent per row: there is no rollback, no retry and
//! no in-flight cap. A batch reports how many rows landed; it never
//! aborts because some did not.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod batch;
pub mod error;
pub mod memory;
pub mod port;
pub mod snapshot;

pub use batch::{append_rows, BatchReport, WriteOutcome};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use port::{Document, DocumentStore};
pub use snapshot::{fetch_snapshot, Snapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
