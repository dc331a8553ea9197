//! DengueMap Core - Record model and aggregation
//!
//! The pure heart of the dashboard pipeline:
//! - Raw CSV-shaped records (header-ordered string maps)
//! - Region-key normalization (trim-only canonicalization)
//! - Numeric coercion with the parse-or-zero fallback
//! - The full-rebuild aggregation fold (region → case/death totals)
//! - Dashboard configuration
//!
//! # Example
//!
//! ```rust
//! use denguemap_core::{AggregateTotals, RawRecord};
//!
//! let rows = vec![
//!     RawRecord::from_pairs([("Region", " Luzon "), ("cases", "100"), ("deaths", "5")]),
//!     RawRecord::from_pairs([("Region", "Luzon"), ("cases", "50"), ("deaths", "3")]),
//! ];
//! let totals = AggregateTotals::from_records(&rows);
//! assert_eq!(totals.get("Luzon").cases, 150);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod aggregate;
pub mod coerce;
pub mod normalize;
pub mod types;

// Re-exports for convenience
pub use aggregate::AggregateTotals;
pub use coerce::coerce_count;
pub use normalize::normalize;
pub use types::{CoercedRow, DashboardConfig, DocId, RawRecord, RegionKey, Totals};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with DengueMap Core
    pub use crate::{
        coerce_count, normalize, AggregateTotals, CoercedRow, DashboardConfig, DocId, RawRecord,
        RegionKey, Totals,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
