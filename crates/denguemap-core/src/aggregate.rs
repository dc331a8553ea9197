//! Aggregation engine
//!
//! Folds coerced rows into a region → totals mapping, merging rows that
//! share a key. The fold is commutative and associative, so document
//! order from the store never matters. Each run is a full rebuild from
//! a complete snapshot; nothing is patched incrementally, which keeps
//! the aggregate an exact image of the store at read time.

use crate::types::{CoercedRow, DashboardConfig, RawRecord, RegionKey, Totals};
use std::collections::HashMap;

/// Per-region summed case/death counts derived from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTotals {
    entries: HashMap<RegionKey, Totals>,
}

impl AggregateTotals {
    /// Create an empty aggregate
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an aggregate from raw records using the default field names
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a RawRecord>) -> Self {
        Self::from_records_with(records, &DashboardConfig::default())
    }

    /// Rebuild an aggregate from raw records using configured field names
    #[must_use]
    pub fn from_records_with<'a>(
        records: impl IntoIterator<Item = &'a RawRecord>,
        config: &DashboardConfig,
    ) -> Self {
        let mut aggregate = Self::new();
        for record in records {
            aggregate.fold(&CoercedRow::from_record(record, config));
        }
        tracing::debug!(regions = aggregate.len(), "aggregate rebuilt");
        aggregate
    }

    /// Fold one coerced row into the aggregate
    pub fn fold(&mut self, row: &CoercedRow) {
        self.entries
            .entry(row.region_key())
            .or_default()
            .absorb(Totals::new(row.cases, row.deaths));
    }

    /// Look up totals for a region label.
    ///
    /// The label is normalized before lookup; a miss yields the
    /// default-zero entry rather than an error.
    #[must_use]
    pub fn get(&self, label: &str) -> Totals {
        self.entries
            .get(&RegionKey::new(label))
            .copied()
            .unwrap_or(Totals::ZERO)
    }

    /// Whether the region has an explicit entry (a miss still reads as zero)
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(&RegionKey::new(label))
    }

    /// Key-wise merge of another aggregate into this one
    pub fn merge(&mut self, other: AggregateTotals) {
        for (key, totals) in other.entries {
            self.entries.entry(key).or_default().absorb(totals);
        }
    }

    /// Iterate entries (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (&RegionKey, &Totals)> {
        self.entries.iter()
    }

    /// Number of distinct regions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any region has an entry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a RawRecord> for AggregateTotals {
    fn from_iter<I: IntoIterator<Item = &'a RawRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
