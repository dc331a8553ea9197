//! Map view
//!
//! On activation the map view reads a complete store snapshot, rebuilds
//! the aggregate from scratch, and joins it against the boundary set to
//! produce one styled layer per feature. A boundary region with no
//! uploaded data renders at the default-zero band; a failed snapshot
//! read becomes an explicit `Failed` state for the renderer to show as
//! a banner rather than an empty map.

use crate::band::{popup_for, style_for, RegionStyle};
use crate::boundary::BoundarySet;
use denguemap_core::{AggregateTotals, DashboardConfig, Totals};
use denguemap_store::{fetch_snapshot, DocumentStore};
use serde_json::Value;

/// One region, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLayer {
    /// Trimmed region name (popup title and join key)
    pub name: String,
    /// Opaque geometry for the renderer
    pub geometry: Value,
    /// Aggregated totals behind this layer
    pub totals: Totals,
    /// Polygon styling
    pub style: RegionStyle,
    /// Popup HTML
    pub popup_html: String,
}

/// What the map renderer gets after activation
#[derive(Debug, Clone, PartialEq)]
pub enum MapViewState {
    /// Snapshot read, aggregate rebuilt, layers joined
    Ready {
        /// One layer per boundary feature, in dataset order
        layers: Vec<RegionLayer>,
        /// Distinct regions present in the uploaded data
        regions_with_data: usize,
    },
    /// The snapshot read failed; show a non-fatal banner
    Failed {
        /// Human-readable reason
        reason: String,
    },
}

/// Join an aggregate against the boundary set.
///
/// Every feature yields a layer; a join miss styles as zero cases.
#[must_use]
pub fn build_choropleth(boundaries: &BoundarySet, totals: &AggregateTotals) -> Vec<RegionLayer> {
    boundaries
        .iter()
        .map(|feature| {
            let name = feature.join_key().to_string();
            let entry = totals.get(&name);
            RegionLayer {
                popup_html: popup_for(&name, entry),
                style: style_for(entry.cases),
                geometry: feature.geometry.clone(),
                totals: entry,
                name,
            }
        })
        .collect()
}

/// The map view itself: a boundary set plus the store it reads from
#[derive(Debug)]
pub struct MapView {
    config: DashboardConfig,
    boundaries: BoundarySet,
}

impl MapView {
    /// Create a map view over a boundary dataset
    #[inline]
    #[must_use]
    pub fn new(config: DashboardConfig, boundaries: BoundarySet) -> Self {
        Self { config, boundaries }
    }

    /// The boundary dataset this view draws
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// Activate the view: fetch, rebuild, join.
    ///
    /// Re-run on every activation - the aggregate is never patched
    /// incrementally, so the layers always mirror the snapshot that was
    /// just read.
    pub async fn activate(&self, store: &dyn DocumentStore) -> MapViewState {
        let snapshot = match fetch_snapshot(store, &self.config.collection).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                return MapViewState::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let totals =
            AggregateTotals::from_records_with(snapshot.records(), &self.config);
        let layers = build_choropleth(&self.boundaries, &totals);

        tracing::info!(
            layers = layers.len(),
            regions = totals.len(),
            documents = snapshot.len(),
            "map view activated"
        );
        MapViewState::Ready {
            regions_with_data: totals.len(),
            layers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use denguemap_core::RawRecord;

    fn boundaries() -> BoundarySet {
        BoundarySet::from_geojson(
            r#"{"features": [
                {"properties": {"name": "Luzon"}, "geometry": {"type": "Polygon"}},
                {"properties": {"name": "Visayas"}, "geometry": {"type": "Polygon"}}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn every_feature_gets_a_layer() {
        let rows = vec![RawRecord::from_pairs([
            ("Region", "Luzon"),
            ("cases", "60000"),
            ("deaths", "12"),
        ])];
        let totals = AggregateTotals::from_records(&rows);

        let layers = build_choropleth(&boundaries(), &totals);

        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].name, "Luzon");
        assert_eq!(layers[0].style.fill_color, "#800026");
        assert_eq!(
            layers[0].popup_html,
            "<b>Luzon</b><br>Total Cases: 60000<br>Total Deaths: 12"
        );
    }

    #[test]
    fn join_miss_styles_as_zero() {
        let layers = build_choropleth(&boundaries(), &AggregateTotals::new());

        assert_eq!(layers[1].totals, Totals::ZERO);
        assert_eq!(layers[1].style.fill_color, "#FEB24C");
        assert_eq!(
            layers[1].popup_html,
            "<b>Visayas</b><br>Total Cases: 0<br>Total Deaths: 0"
        );
    }
}
