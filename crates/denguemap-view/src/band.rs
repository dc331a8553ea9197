//! Case-count banding and choropleth styling
//!
//! Six density bands over aggregated case counts, closed lower bounds,
//! highest matching band wins. Colors and stroke settings match the
//! dashboard's established palette; popups summarize one region's
//! totals as a small HTML snippet.

use denguemap_core::Totals;
use serde::{Deserialize, Serialize};

/// Discrete severity tier for an aggregated case count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Fewer than 10 000 cases
    Low,
    /// 10 000 – 19 999
    Elevated,
    /// 20 000 – 29 999
    High,
    /// 30 000 – 39 999
    Severe,
    /// 40 000 – 49 999
    Critical,
    /// 50 000 and above
    Extreme,
}

impl Band {
    /// Lower bounds of the non-default bands, ascending
    pub const THRESHOLDS: [u64; 5] = [10_000, 20_000, 30_000, 40_000, 50_000];

    /// Classify a case count (total: every count lands in exactly one band)
    #[must_use]
    pub fn for_cases(cases: u64) -> Self {
        if cases >= 50_000 {
            Self::Extreme
        } else if cases >= 40_000 {
            Self::Critical
        } else if cases >= 30_000 {
            Self::Severe
        } else if cases >= 20_000 {
            Self::High
        } else if cases >= 10_000 {
            Self::Elevated
        } else {
            Self::Low
        }
    }

    /// Fill color for this band
    #[must_use]
    pub const fn fill_color(self) -> &'static str {
        match self {
            Self::Low => "#FEB24C",
            Self::Elevated => "#FD8D3C",
            Self::High => "#FC4E2A",
            Self::Severe => "#E31A1C",
            Self::Critical => "#BD0026",
            Self::Extreme => "#800026",
        }
    }

    /// Visual intensity rank, 0 (lightest) through 5 (darkest)
    #[inline]
    #[must_use]
    pub const fn intensity(self) -> u8 {
        self as u8
    }
}

/// Polygon styling for one region on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStyle {
    /// Fill color (band-dependent)
    pub fill_color: &'static str,
    /// Stroke color
    pub stroke_color: &'static str,
    /// Stroke weight in pixels
    pub stroke_weight: u8,
    /// Stroke opacity
    pub stroke_opacity: f32,
    /// Stroke dash pattern
    pub dash_array: &'static str,
    /// Fill opacity
    pub fill_opacity: f32,
}

/// Style a region polygon by its aggregated case count
#[must_use]
pub fn style_for(cases: u64) -> RegionStyle {
    RegionStyle {
        fill_color: Band::for_cases(cases).fill_color(),
        stroke_color: "white",
        stroke_weight: 1,
        stroke_opacity: 1.0,
        dash_array: "3",
        fill_opacity: 0.7,
    }
}

/// Popup summary for one region's totals
#[must_use]
pub fn popup_for(region: &str, totals: Totals) -> String {
    format!(
        "<b>{region}</b><br>Total Cases: {}<br>Total Deaths: {}",
        totals.cases, totals.deaths
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries_select_the_right_band() {
        assert_eq!(Band::for_cases(0), Band::Low);
        assert_eq!(Band::for_cases(9_999), Band::Low);
        assert_eq!(Band::for_cases(10_000), Band::Elevated);
        assert_eq!(Band::for_cases(19_999), Band::Elevated);
        assert_eq!(Band::for_cases(20_000), Band::High);
        assert_eq!(Band::for_cases(30_000), Band::Severe);
        assert_eq!(Band::for_cases(40_000), Band::Critical);
        assert_eq!(Band::for_cases(49_999), Band::Critical);
        assert_eq!(Band::for_cases(50_000), Band::Extreme);
        assert_eq!(Band::for_cases(u64::MAX), Band::Extreme);
    }

    #[test]
    fn style_carries_the_band_color() {
        assert_eq!(style_for(50_000).fill_color, "#800026");
        assert_eq!(style_for(9_999).fill_color, "#FEB24C");
        assert_eq!(style_for(0).fill_color, "#FEB24C");

        let style = style_for(25_000);
        assert_eq!(style.stroke_color, "white");
        assert_eq!(style.stroke_weight, 1);
        assert_eq!(style.dash_array, "3");
        assert!((style.fill_opacity - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn popup_formats_region_and_totals() {
        let html = popup_for("Luzon", Totals::new(150, 8));
        assert_eq!(html, "<b>Luzon</b><br>Total Cases: 150<br>Total Deaths: 8");
    }
}
