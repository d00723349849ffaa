//! Loading raw way segments from upstream map-data queries.

mod overpass;

pub use overpass::parse_overpass_json;
