//! Error types for the persistence boundary

/// Document-store errors
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// A single document write was rejected
    #[error("write rejected: {0}")]
    WriteRejected(String),

    /// The bulk read failed
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// The backing service could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether retrying the same operation could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::FetchFailed(_) | Self::Unavailable(_))
    }
}
