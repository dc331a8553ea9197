//! DengueMap View - Projections over the aggregated data
//!
//! Everything the two dashboard views need from the pipeline:
//! - Case-count banding and per-region choropleth styling
//! - The boundary-feature set and its join against aggregate totals
//! - Map-view activation (snapshot → aggregate → styled layers)
//! - Table projection (headers, 1-indexed pages, page-number window)
//!
//! Rendering itself (tiles, widgets, markup) stays outside; this crate
//! produces the data those renderers consume.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod band;
pub mod boundary;
pub mod error;
pub mod map;
pub mod table;

pub use band::{popup_for, style_for, Band, RegionStyle};
pub use boundary::{BoundaryFeature, BoundarySet};
pub use error::ViewError;
pub use map::{build_choropleth, MapView, MapViewState, RegionLayer};
pub use table::TableProjection;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
