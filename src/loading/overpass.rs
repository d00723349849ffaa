//! Deserialization of Overpass `out tags geom` responses.

use geo::{Coord, LineString};
use log::warn;
use serde::Deserialize;

use crate::model::{RawSegment, UNNAMED_ROAD};
use crate::{Error, Tags};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    element_type: String,
    id: u64,
    #[serde(default)]
    tags: Tags,
    #[serde(default)]
    geometry: Vec<OverpassPoint>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct OverpassPoint {
    lat: f64,
    lon: f64,
}

/// Parses an Overpass API response body into raw segments.
///
/// Only `way` elements carrying at least one geometry point are kept;
/// anything else is skipped with a warning. Ways without a `name` tag
/// get [`UNNAMED_ROAD`].
///
/// # Errors
///
/// [`Error::InvalidData`] when the body is not valid Overpass JSON.
pub fn parse_overpass_json(body: &str) -> Result<Vec<RawSegment>, Error> {
    let response: OverpassResponse =
        serde_json::from_str(body).map_err(|e| Error::InvalidData(e.to_string()))?;

    let mut segments = Vec::with_capacity(response.elements.len());
    for element in response.elements {
        if element.element_type != "way" {
            continue;
        }
        if element.geometry.is_empty() {
            warn!("way {} has no geometry, skipping", element.id);
            continue;
        }
        segments.push(into_segment(element));
    }
    Ok(segments)
}

fn into_segment(element: OverpassElement) -> RawSegment {
    let coords: Vec<Coord<f64>> = element
        .geometry
        .iter()
        .map(|point| Coord {
            x: point.lon,
            y: point.lat,
        })
        .collect();

    let name = element
        .tags
        .get("name")
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| UNNAMED_ROAD.to_string());

    RawSegment {
        id: element.id.to_string(),
        name,
        geometry: LineString::new(coords),
        tags: element.tags,
    }
}
