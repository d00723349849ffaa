//! Conversion of finished roads to GeoJSON for map overlays.

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::model::StyledRoad;

/// Converts styled roads to a `FeatureCollection` with one `LineString`
/// feature per road.
///
/// # Errors
///
/// [`Error::GeoJsonError`] when a feature cannot be assembled.
pub fn roads_to_geojson(roads: &[StyledRoad]) -> Result<FeatureCollection, Error> {
    let features = roads
        .iter()
        .map(road_feature)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

pub fn roads_to_geojson_string(roads: &[StyledRoad]) -> Result<String, Error> {
    serde_json::to_string(&roads_to_geojson(roads)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn road_feature(styled: &StyledRoad) -> Result<Feature, Error> {
    let road = &styled.road;
    let geometry = Geometry::new(GeoJsonValue::from(&road.geometry));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "id": road.id,
            "name": road.name,
            "length_m": road.metrics.length_m,
            "twistiness": road.metrics.twistiness,
            "corner_count": road.metrics.corner_count,
            "length_category": styled.length_category,
            "color": styled.style.color,
            "weight": styled.style.weight,
            "is_connected": road.is_connected,
        }
    });

    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
