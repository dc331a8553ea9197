//! CSV parsing
//!
//! The header row defines the field set; every following line becomes
//! one `RawRecord` keyed by those fields, values untouched. Blank lines
//! are skipped by the reader. A leading BOM on the first header is
//! stripped so `Region` never silently becomes `\u{feff}Region`.

use crate::error::IngestError;
use denguemap_core::RawRecord;
use std::io::Read;
use std::path::Path;

/// A parsed CSV payload: the header field list plus one record per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    /// Field names, in header order
    pub fields: Vec<String>,
    /// One record per non-empty data line
    pub rows: Vec<RawRecord>,
}

impl CsvUpload {
    /// Number of parsed rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the payload had no data lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a CSV payload from any reader.
///
/// Rows shorter than the header are padded with absent fields; rows
/// longer than the header have their trailing extras dropped (there is
/// no field name to file them under).
///
/// # Errors
/// Fails on unreadable input or malformed CSV framing; individual cell
/// contents never fail here (coercion happens later).
pub fn parse_csv(reader: impl Read) -> Result<CsvUpload, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let fields: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    if fields.is_empty() || fields.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeaders);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: RawRecord = fields
            .iter()
            .zip(record.iter())
            .map(|(field, value)| (field.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), fields = fields.len(), "csv parsed");
    Ok(CsvUpload { fields, rows })
}

/// Parse a CSV file from disk.
///
/// # Errors
/// Same as [`parse_csv`], plus the open itself.
pub fn parse_csv_path(path: impl AsRef<Path>) -> Result<CsvUpload, IngestError> {
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}
