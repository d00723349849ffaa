//! Length classification and map styling for finished roads.

use crate::model::{LengthCategory, RoadColor, RoadStyle};

const LONG_ROAD_KM: f64 = 15.0;
const MEDIUM_ROAD_KM: f64 = 5.0;

/// Twistiness above this renders red on the map.
pub const RED_TWISTINESS: f64 = 0.007;
/// Twistiness above this renders yellow.
pub const YELLOW_TWISTINESS: f64 = 0.0035;

pub fn length_category(meters: f64) -> LengthCategory {
    let km = meters / 1000.0;
    if km >= LONG_ROAD_KM {
        LengthCategory::Long
    } else if km >= MEDIUM_ROAD_KM {
        LengthCategory::Medium
    } else {
        LengthCategory::Short
    }
}

pub fn road_style(meters: f64, twistiness: f64) -> RoadStyle {
    let color = if twistiness > RED_TWISTINESS {
        RoadColor::Red
    } else if twistiness > YELLOW_TWISTINESS {
        RoadColor::Yellow
    } else {
        RoadColor::Green
    };
    let weight = match length_category(meters) {
        LengthCategory::Long => 9,
        LengthCategory::Medium => 7,
        LengthCategory::Short => 5,
    };
    RoadStyle { color, weight }
}
