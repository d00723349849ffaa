//! Raw way segments as returned by an upstream map-data query.

use geo::LineString;

use crate::Tags;

/// Name substituted for ways whose source tags carry none.
pub const UNNAMED_ROAD: &str = "Unnamed Road";

/// One unprocessed way, immutable once fetched.
///
/// Coordinates are degrees, `x` = longitude and `y` = latitude. Values are
/// taken from the upstream response as-is: out-of-range or non-finite
/// coordinates are not rejected here and flow through the trigonometry
/// downstream.
#[derive(Debug, Clone)]
pub struct RawSegment {
    /// Way id from the source data.
    pub id: String,
    /// Road name, [`UNNAMED_ROAD`] when the way is unnamed.
    pub name: String,
    /// Ordered point sequence, at least one point.
    pub geometry: LineString<f64>,
    /// Raw key/value tags of the way.
    pub tags: Tags,
}
