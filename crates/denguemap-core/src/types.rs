//! Core types for DengueMap
//!
//! Defines the fundamental types for the pipeline:
//! - Raw records as parsed from CSV headers
//! - Region keys and per-region totals
//! - Coerced rows
//! - Dashboard configuration

use crate::coerce::coerce_count;
use crate::normalize::normalize;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique persisted-document identifier (ULID for sortability)
///
/// Document identity is never derived from the region, so repeated
/// uploads of the same region accumulate as separate documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub Ulid);

impl DocId {
    /// Generate new document ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical region label used to join uploads against boundary geometry.
///
/// Construction strips surrounding whitespace and nothing else: case,
/// internal whitespace and diacritics pass through untouched, so join
/// correctness depends on label consistency between the two sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionKey(String);

impl RegionKey {
    /// Canonicalize a free-text region label
    #[inline]
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(normalize(label).to_string())
    }

    /// The canonical label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionKey {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for RegionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Summed case/death counts for one region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Total reported cases
    pub cases: u64,
    /// Total reported deaths
    pub deaths: u64,
}

impl Totals {
    /// Create totals from explicit counts
    #[inline]
    #[must_use]
    pub const fn new(cases: u64, deaths: u64) -> Self {
        Self { cases, deaths }
    }

    /// The default-zero entry used for join misses
    pub const ZERO: Totals = Totals::new(0, 0);

    /// Accumulate another row's counts into this entry
    #[inline]
    pub fn absorb(&mut self, other: Totals) {
        self.cases = self.cases.saturating_add(other.cases);
        self.deaths = self.deaths.saturating_add(other.deaths);
    }
}

/// One parsed CSV line, keyed by header field name.
///
/// Field order follows the header row (table columns render in header
/// order). Values are stored exactly as received, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(IndexMap<String, String>);

impl RawRecord {
    /// Create an empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from (field, value) pairs, preserving order
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Insert or replace a field
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Look up a field value
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Field names in header order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// (field, value) pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A raw record with its numeric fields normalized to non-negative integers.
///
/// `region` is carried raw (untrimmed); the trim happens at key time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercedRow {
    /// Region label as received
    pub region: String,
    /// Reported cases, coerced (non-parseable → 0)
    pub cases: u64,
    /// Reported deaths, coerced (non-parseable → 0)
    pub deaths: u64,
}

impl CoercedRow {
    /// Coerce one raw record using the configured field names
    #[must_use]
    pub fn from_record(record: &RawRecord, config: &DashboardConfig) -> Self {
        Self {
            region: record
                .field(&config.region_field)
                .unwrap_or_default()
                .to_string(),
            cases: coerce_count(record.field(&config.cases_field)),
            deaths: coerce_count(record.field(&config.deaths_field)),
        }
    }

    /// The canonical key this row aggregates under
    #[inline]
    #[must_use]
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(&self.region)
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Document-store collection holding uploaded rows
    pub collection: String,
    /// Rows per table page
    pub page_size: usize,
    /// Field carrying the region label
    pub region_field: String,
    /// Field carrying the case count
    pub cases_field: String,
    /// Field carrying the death count
    pub deaths_field: String,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different store collection
    #[inline]
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// With a different table page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// With different record field names
    #[inline]
    #[must_use]
    pub fn with_fields(
        mut self,
        region: impl Into<String>,
        cases: impl Into<String>,
        deaths: impl Into<String>,
    ) -> Self {
        self.region_field = region.into();
        self.cases_field = cases.into();
        self.deaths_field = deaths.into();
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            collection: "csv_data".to_string(),
            page_size: 15,
            region_field: "Region".to_string(),
            cases_field: "cases".to_string(),
            deaths_field: "deaths".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_key_trims_only() {
        assert_eq!(RegionKey::new("  Luzon ").as_str(), "Luzon");
        assert_eq!(RegionKey::new("luzon").as_str(), "luzon");
        assert_eq!(RegionKey::new("Mimaropa  Region").as_str(), "Mimaropa  Region");
    }

    #[test]
    fn raw_record_preserves_field_order() {
        let record = RawRecord::from_pairs([("Region", "Luzon"), ("cases", "1"), ("deaths", "0")]);
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["Region", "cases", "deaths"]);
    }

    #[test]
    fn coerced_row_uses_configured_fields() {
        let config = DashboardConfig::new().with_fields("area", "confirmed", "fatal");
        let record =
            RawRecord::from_pairs([("area", "Bicol"), ("confirmed", "42"), ("fatal", "2")]);

        let row = CoercedRow::from_record(&record, &config);
        assert_eq!(row.region, "Bicol");
        assert_eq!(row.cases, 42);
        assert_eq!(row.deaths, 2);
    }

    #[test]
    fn coerced_row_missing_fields_default() {
        let config = DashboardConfig::new();
        let row = CoercedRow::from_record(&RawRecord::new(), &config);
        assert_eq!(row.region, "");
        assert_eq!(row.cases, 0);
        assert_eq!(row.deaths, 0);
    }

    #[test]
    fn totals_absorb_saturates() {
        let mut totals = Totals::new(u64::MAX, 1);
        totals.absorb(Totals::new(10, 2));
        assert_eq!(totals.cases, u64::MAX);
        assert_eq!(totals.deaths, 3);
    }

    #[test]
    fn doc_ids_are_unique() {
        assert_ne!(DocId::new(), DocId::new());
    }
}
