use serde::Deserialize;

use crate::algo::style::{RED_TWISTINESS, YELLOW_TWISTINESS};

/// Search criteria applied to raw segments before stitching.
///
/// The defaults reproduce the standard interactive search: drop ways
/// shorter than 2 km, drop straight urban streets, keep every curve
/// class.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Segments shorter than this many meters are dropped outright.
    pub min_length_m: f64,
    /// Keep urban segments even when they are not curvy.
    pub include_straight_urban: bool,
    /// Narrow the search to curvier roads.
    pub curve_class: CurveClass,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            min_length_m: 2000.0,
            include_straight_urban: false,
            curve_class: CurveClass::Any,
        }
    }
}

/// Curvature bands a search can be narrowed to, aligned with the map
/// coloring thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveClass {
    #[default]
    Any,
    /// At least yellow on the map.
    Moderate,
    /// Red on the map.
    VeryTwisty,
}

impl CurveClass {
    pub fn matches(self, twistiness: f64) -> bool {
        match self {
            Self::Any => true,
            Self::Moderate => twistiness > YELLOW_TWISTINESS,
            Self::VeryTwisty => twistiness > RED_TWISTINESS,
        }
    }
}
