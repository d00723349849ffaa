//! Data model for raw way segments and stitched scenic roads.

pub mod road;
pub mod segment;

pub use road::{LengthCategory, MergedRoad, RoadColor, RoadMetrics, RoadStyle, StyledRoad};
pub use segment::{RawSegment, UNNAMED_ROAD};
