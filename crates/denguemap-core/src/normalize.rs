//! Region-key normalization
//!
//! Canonicalizes free-text region labels into stable lookup keys. The
//! only transformation is stripping surrounding whitespace: the same
//! function is applied to uploaded rows and to boundary-feature names,
//! so anything beyond that (case folding, alias tables) would change
//! the join contract between the two datasets.

/// Canonicalize a region label.
///
/// Trim-only: two labels differing solely in surrounding whitespace map
/// to the same key. Pure and total; idempotent by construction.
#[inline]
#[must_use]
pub fn normalize(label: &str) -> &str {
    label.trim()
}
