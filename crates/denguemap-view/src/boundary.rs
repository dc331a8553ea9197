//! Boundary-feature set
//!
//! The country outline ships as a static GeoJSON feature collection.
//! Each feature contributes a display name (`properties.name`) and an
//! opaque geometry blob that passes straight through to the renderer;
//! nothing here interprets coordinates.

use crate::error::ViewError;
use denguemap_core::normalize;
use serde::Deserialize;
use serde_json::Value;

/// One named polygon from the boundary dataset
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Display name, as found in `properties.name` (untrimmed)
    pub name: String,
    /// Geometry, kept opaque
    pub geometry: Value,
}

impl BoundaryFeature {
    /// The key this feature joins against aggregate totals with
    #[inline]
    #[must_use]
    pub fn join_key(&self) -> &str {
        normalize(&self.name)
    }
}

/// The full boundary dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    features: Vec<BoundaryFeature>,
}

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Value,
    #[serde(default)]
    geometry: Value,
}

impl BoundarySet {
    /// Decode a GeoJSON feature collection.
    ///
    /// # Errors
    /// Fails on invalid JSON, or on any feature whose `properties.name`
    /// is missing or not a string. The dataset is bundled, so a bad
    /// feature means a broken bundle, not bad user input.
    pub fn from_geojson(payload: &str) -> Result<Self, ViewError> {
        let raw: RawCollection = serde_json::from_str(payload)?;

        let mut features = Vec::with_capacity(raw.features.len());
        for (index, feature) in raw.features.into_iter().enumerate() {
            let name = feature
                .properties
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| ViewError::MalformedBoundary {
                    index,
                    reason: "properties.name missing or not a string".to_string(),
                })?
                .to_string();

            features.push(BoundaryFeature {
                name,
                geometry: feature.geometry,
            });
        }

        tracing::debug!(features = features.len(), "boundary set loaded");
        Ok(Self { features })
    }

    /// Iterate features in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryFeature> {
        self.features.iter()
    }

    /// Number of features
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the dataset has no features
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FEATURES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Luzon"},
             "geometry": {"type": "Polygon", "coordinates": []}},
            {"type": "Feature", "properties": {"name": " Visayas "},
             "geometry": {"type": "Polygon", "coordinates": []}}
        ]
    }"#;

    #[test]
    fn decodes_names_and_keeps_geometry_opaque() {
        let set = BoundarySet::from_geojson(TWO_FEATURES).unwrap();
        assert_eq!(set.len(), 2);

        let first = set.iter().next().unwrap();
        assert_eq!(first.name, "Luzon");
        assert_eq!(first.geometry["type"], "Polygon");
    }

    #[test]
    fn join_key_trims_the_feature_name() {
        let set = BoundarySet::from_geojson(TWO_FEATURES).unwrap();
        let second = set.iter().nth(1).unwrap();
        assert_eq!(second.name, " Visayas ");
        assert_eq!(second.join_key(), "Visayas");
    }

    #[test]
    fn missing_name_is_a_load_error() {
        let payload = r#"{"features": [{"properties": {}, "geometry": null}]}"#;
        let err = BoundarySet::from_geojson(payload).unwrap_err();
        assert!(matches!(
            err,
            ViewError::MalformedBoundary { index: 0, .. }
        ));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(
            BoundarySet::from_geojson("not json"),
            Err(ViewError::BoundaryDecode(_))
        ));
    }
}
