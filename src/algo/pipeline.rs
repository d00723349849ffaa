//! The full search analysis pass: annotate, filter, stitch, style.
//!
//! This is the one entry point the interactive search, batch tooling
//! and tests all share, so the filtering rules and the stitcher cannot
//! drift apart.

use log::info;

use crate::algo::config::SearchFilter;
use crate::algo::metrics::{compute_metrics, is_interesting};
use crate::algo::stitch::stitch_segments;
use crate::algo::style::{length_category, road_style};
use crate::algo::urban::{URBAN_TWISTINESS_CUTOFF, is_urban};
use crate::model::{MergedRoad, RawSegment, StyledRoad};

/// Runs the whole pipeline over freshly fetched way segments and
/// returns styled roads, longest first, ready for a map overlay or a
/// saved-road record.
pub fn analyze_segments(segments: Vec<RawSegment>, filter: &SearchFilter) -> Vec<StyledRoad> {
    let fetched = segments.len();

    let survivors: Vec<MergedRoad> = segments
        .into_iter()
        .filter_map(|segment| {
            // Degenerate ways cannot be measured; straight ways are not
            // worth surfacing.
            let Ok(metrics) = compute_metrics(&segment.geometry) else {
                return None;
            };
            if !is_interesting(&metrics) {
                return None;
            }
            if metrics.length_m < filter.min_length_m {
                return None;
            }
            if !filter.include_straight_urban
                && metrics.twistiness <= URBAN_TWISTINESS_CUTOFF
                && is_urban(&segment)
            {
                return None;
            }
            if !filter.curve_class.matches(metrics.twistiness) {
                return None;
            }
            Some(MergedRoad::from_segment(segment, metrics))
        })
        .collect();

    info!(
        "{} of {} fetched ways kept for stitching",
        survivors.len(),
        fetched
    );

    let stitched = stitch_segments(survivors);
    info!("stitched into {} roads", stitched.len());

    stitched
        .into_iter()
        .map(|road| {
            let metrics = road.metrics;
            StyledRoad {
                length_category: length_category(metrics.length_m),
                style: road_style(metrics.length_m, metrics.twistiness),
                road,
            }
        })
        .collect()
}
