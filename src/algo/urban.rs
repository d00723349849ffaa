//! Tag heuristics for flagging residential and low-speed ways.

use crate::model::RawSegment;

const URBAN_TAG_KEYS: [&str; 3] = ["residential", "living_street", "urban"];

/// Signed speed limits at or below this read as in-town traffic.
const URBAN_MAXSPEED: i64 = 50;

/// Urban segments are only surfaced when curvier than this; straight
/// city streets are not scenic roads.
pub const URBAN_TWISTINESS_CUTOFF: f64 = 0.007;

/// Whether a way looks like an urban street, from its tags alone.
///
/// A way is urban when a residential-type tag key is present with a
/// non-empty value, when its `highway` class contains one of those
/// tokens, or when its `maxspeed` starts with an integer of at most 50.
pub fn is_urban(segment: &RawSegment) -> bool {
    let tags = &segment.tags;

    if URBAN_TAG_KEYS
        .iter()
        .any(|key| tags.get(*key).is_some_and(|value| !value.is_empty()))
    {
        return true;
    }

    if let Some(highway) = tags.get("highway")
        && URBAN_TAG_KEYS.iter().any(|key| highway.contains(key))
    {
        return true;
    }

    if let Some(maxspeed) = tags.get("maxspeed")
        && let Some(limit) = leading_int(maxspeed)
    {
        return limit <= URBAN_MAXSPEED;
    }

    false
}

/// Leading integer of a tag value, so `"50 mph"` parses as 50. Values
/// with no leading digits have no speed limit to compare against.
fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
