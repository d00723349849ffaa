//! Stitched road output units and their derived metrics.

use geo::LineString;
use serde::Serialize;

use crate::Tags;
use crate::model::RawSegment;

/// Metrics derived from a road polyline, recomputed whenever the
/// geometry changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RoadMetrics {
    /// Total great-circle length in meters.
    pub length_m: f64,
    /// Total bearing change per kilometer of travel (radians/km).
    pub twistiness: f64,
    /// Interior points whose bearing deflects sharply enough to count
    /// as a corner.
    pub corner_count: u32,
}

/// A road produced by the stitching pass: either a single surviving
/// segment or a chain of segments merged at near-coincident endpoints.
#[derive(Debug, Clone)]
pub struct MergedRoad {
    /// Constituent way ids joined by `_` when merged, else the original id.
    pub id: String,
    pub name: String,
    pub geometry: LineString<f64>,
    /// Union of constituent tags, later constituents winning on collisions.
    pub tags: Tags,
    pub metrics: RoadMetrics,
    /// True iff this road was produced by merging at least two segments.
    pub is_connected: bool,
}

impl MergedRoad {
    /// Wraps a single unmerged segment; stitching may later absorb
    /// other segments into it.
    pub fn from_segment(segment: RawSegment, metrics: RoadMetrics) -> Self {
        Self {
            id: segment.id,
            name: segment.name,
            geometry: segment.geometry,
            tags: segment.tags,
            metrics,
            is_connected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadColor {
    Green,
    Yellow,
    Red,
}

/// Rendering hints for a polyline overlay: color by twistiness, line
/// weight by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadStyle {
    pub color: RoadColor,
    pub weight: u32,
}

/// Final output unit of a search: a stitched road plus its display
/// classification.
#[derive(Debug, Clone)]
pub struct StyledRoad {
    pub road: MergedRoad,
    pub length_category: LengthCategory,
    pub style: RoadStyle,
}
