//! Error types for CSV ingestion

/// Upload-path errors
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The CSV payload could not be parsed
    #[error("csv parse failed: {0}")]
    Csv(#[from] csv::Error),

    /// The file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload had no header row to derive fields from
    #[error("missing header row")]
    MissingHeaders,
}
