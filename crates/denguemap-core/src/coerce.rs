//! Numeric field coercion
//!
//! Uploaded CSV fields arrive as strings. Counts are coerced with a
//! parse-or-zero policy: a missing, empty or non-numeric field becomes
//! 0 rather than an error. That is a deliberate data-loss fallback, not
//! a silent bug - aggregation must stay total over arbitrary uploads.

/// Coerce a raw count field into a non-negative integer.
///
/// Accepts surrounding whitespace around an otherwise clean base-10
/// integer. Negative-looking and float-looking values do not parse and
/// coerce to 0, keeping the never-negative invariant.
#[inline]
#[must_use]
pub fn coerce_count(field: Option<&str>) -> u64 {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}
