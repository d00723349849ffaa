pub use crate::Error;
pub use crate::Tags;

// Re-export key components
pub use crate::algo::metrics::{
    CORNER_TURN_RADIANS, MIN_TWISTINESS, compute_metrics, haversine_km, is_interesting,
    length_meters,
};
pub use crate::algo::stitch::{STITCH_TOLERANCE_KM, can_connect, connect, stitch_segments};
pub use crate::algo::style::{length_category, road_style};
pub use crate::algo::urban::{URBAN_TWISTINESS_CUTOFF, is_urban};
pub use crate::algo::{CurveClass, SearchFilter, analyze_segments};
pub use crate::export::{roads_to_geojson, roads_to_geojson_string};
pub use crate::loading::parse_overpass_json;

// Core data model
pub use crate::model::{
    LengthCategory, MergedRoad, RawSegment, RoadColor, RoadMetrics, RoadStyle, StyledRoad,
    UNNAMED_ROAD,
};
