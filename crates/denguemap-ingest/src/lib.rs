//! DengueMap Ingest - CSV upload path
//!
//! Turns a user-selected CSV file into raw records and pushes them into
//! the document store:
//! - Header-driven parsing (field names come from the header row)
//! - Values kept verbatim; trimming and coercion happen downstream
//! - One concurrent document write per row, reported per-row
//!
//! The parsed rows are returned alongside the persistence report so the
//! table can render immediately, without waiting on a store round-trip.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod parse;
pub mod upload;

pub use error::IngestError;
pub use parse::{parse_csv, parse_csv_path, CsvUpload};
pub use upload::{upload_csv, UploadReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
