//! Error types for the view layer

use denguemap_store::StoreError;

/// View-layer errors
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The persistence layer failed underneath a view
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The boundary dataset could not be decoded
    #[error("boundary decode failed: {0}")]
    BoundaryDecode(#[from] serde_json::Error),

    /// A boundary feature is unusable (the dataset is static, so this
    /// is a packaging mistake rather than a runtime condition)
    #[error("malformed boundary feature at index {index}: {reason}")]
    MalformedBoundary {
        /// Position in the feature collection
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}
