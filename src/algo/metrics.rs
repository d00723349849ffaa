//! Great-circle length and bearing-change metrics for road polylines.

use std::f64::consts::{PI, TAU};

use geo::{Coord, LineString};
use itertools::Itertools;

use crate::Error;
use crate::model::RoadMetrics;

/// Mean Earth radius used for all great-circle math.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A bearing deflection sharper than this (~5 degrees) counts as a corner.
pub const CORNER_TURN_RADIANS: f64 = 0.087;

/// Roads below this bearing change per km, with no corners, read as straight.
pub const MIN_TWISTINESS: f64 = 0.0025;

/// Haversine great-circle distance in kilometers.
///
/// Inputs are degrees (`x` = longitude, `y` = latitude) and are not
/// validated; garbage coordinates produce garbage distances.
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of haversine distances between consecutive points, in meters.
/// Zero for a polyline of fewer than two points.
pub fn length_meters(line: &LineString<f64>) -> f64 {
    line.0
        .iter()
        .tuple_windows()
        .map(|(a, b)| haversine_km(*a, *b))
        .sum::<f64>()
        * 1000.0
}

/// Computes length, twistiness and corner count for a polyline.
///
/// For each interior point the turn angle between the incoming and
/// outgoing bearings is accumulated, normalized into `[0, PI]`.
/// Twistiness is the total turn angle divided by the distance traveled
/// across the interior points, in radians per kilometer.
///
/// # Errors
///
/// [`Error::DegenerateGeometry`] when no interior distance can be
/// accumulated: fewer than three points, or all interior points
/// coincident. Whether a well-formed road is *worth keeping* is a
/// separate question, answered by [`is_interesting`].
pub fn compute_metrics(line: &LineString<f64>) -> Result<RoadMetrics, Error> {
    let mut total_turn = 0.0;
    let mut total_km = 0.0;
    let mut corner_count = 0u32;

    for (prev, mid, next) in line.0.iter().tuple_windows() {
        let inbound = (mid.y - prev.y).atan2(mid.x - prev.x);
        let outbound = (next.y - mid.y).atan2(next.x - mid.x);

        let mut turn = (outbound - inbound).abs();
        if turn > PI {
            turn = TAU - turn;
        }
        if turn > CORNER_TURN_RADIANS {
            corner_count += 1;
        }

        total_turn += turn;
        total_km += haversine_km(*mid, *next);
    }

    if total_km == 0.0 {
        return Err(Error::DegenerateGeometry);
    }

    Ok(RoadMetrics {
        length_m: length_meters(line),
        twistiness: total_turn / total_km,
        corner_count,
    })
}

/// Whether a road is curvy enough to surface at all. Straight roads
/// (low twistiness and not a single corner) are uninteresting.
pub fn is_interesting(metrics: &RoadMetrics) -> bool {
    metrics.twistiness >= MIN_TWISTINESS || metrics.corner_count >= 1
}
