//! Greedy stitching of way segments into continuous roads.
//!
//! Segments are processed in strict input order and each chain absorbs
//! the first not-yet-consumed candidate within tolerance, never the
//! nearest one. Which segment absorbs which therefore depends on input
//! order; callers that need reproducible output must keep that order
//! stable. The scan is O(n^2) per finished road, which is fine for the
//! low hundreds of ways a bounded radius query returns.

use fixedbitset::FixedBitSet;
use geo::{Coord, LineString};
use log::debug;

use crate::algo::metrics::{compute_metrics, haversine_km, length_meters};
use crate::model::{MergedRoad, RoadMetrics, UNNAMED_ROAD};

/// Endpoints within this distance are treated as touching.
pub const STITCH_TOLERANCE_KM: f64 = 0.05;

/// Separator between constituent way ids in a merged road id.
pub const MERGE_SEPARATOR: char = '_';

/// The four ways two polylines can meet, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    EndStart,
    StartEnd,
    EndEnd,
    StartStart,
}

fn endpoints(line: &LineString<f64>) -> (Coord<f64>, Coord<f64>) {
    (line.0[0], line.0[line.0.len() - 1])
}

fn pairing_distances(r1: &MergedRoad, r2: &MergedRoad) -> [(Pairing, f64); 4] {
    let (start1, end1) = endpoints(&r1.geometry);
    let (start2, end2) = endpoints(&r2.geometry);
    [
        (Pairing::EndStart, haversine_km(end1, start2)),
        (Pairing::StartEnd, haversine_km(start1, end2)),
        (Pairing::EndEnd, haversine_km(end1, end2)),
        (Pairing::StartStart, haversine_km(start1, start2)),
    ]
}

/// Whether two roads may be joined: never across two different real
/// names, and only when some pair of endpoints is within
/// [`STITCH_TOLERANCE_KM`].
pub fn can_connect(r1: &MergedRoad, r2: &MergedRoad) -> bool {
    if r1.name != UNNAMED_ROAD && r2.name != UNNAMED_ROAD && r1.name != r2.name {
        return false;
    }
    pairing_distances(r1, r2)
        .iter()
        .any(|(_, distance)| *distance <= STITCH_TOLERANCE_KM)
}

/// Joins two roads at their closest endpoint pairing, reversing one
/// geometry when the closest pairing demands it.
///
/// The merged road's metrics are left zeroed; [`stitch_segments`]
/// recomputes them once a chain stops growing.
pub fn connect(r1: MergedRoad, r2: MergedRoad) -> MergedRoad {
    let distances = pairing_distances(&r1, &r2);
    // Strict `<` keeps the earliest pairing in evaluation order on ties.
    let (pairing, _) = distances
        .iter()
        .fold(distances[0], |best, candidate| {
            if candidate.1 < best.1 { *candidate } else { best }
        });

    let MergedRoad {
        id: id1,
        name: name1,
        geometry: geometry1,
        tags: mut tags,
        ..
    } = r1;
    let MergedRoad {
        id: id2,
        name: name2,
        geometry: geometry2,
        tags: tags2,
        ..
    } = r2;

    let mut coords1 = geometry1.0;
    let mut coords2 = geometry2.0;
    let merged = match pairing {
        Pairing::EndStart => {
            coords1.extend(coords2);
            coords1
        }
        Pairing::StartEnd => {
            coords2.extend(coords1);
            coords2
        }
        Pairing::EndEnd => {
            coords2.reverse();
            coords1.extend(coords2);
            coords1
        }
        Pairing::StartStart => {
            coords1.reverse();
            coords1.extend(coords2);
            coords1
        }
    };

    let name = if !name1.is_empty() {
        name1
    } else if !name2.is_empty() {
        name2
    } else {
        UNNAMED_ROAD.to_string()
    };
    tags.extend(tags2);

    MergedRoad {
        id: format!("{id1}{MERGE_SEPARATOR}{id2}"),
        name,
        geometry: LineString::new(merged),
        tags,
        metrics: RoadMetrics::default(),
        is_connected: true,
    }
}

/// Merges a working list of roads into maximal connected chains.
///
/// Iterates by original index; each chain keeps restarting its scan and
/// absorbing the first connectable candidate until a full pass finds
/// none. Finished roads get their metrics recomputed on the merged
/// geometry and the whole output is sorted by length, longest first.
pub fn stitch_segments(roads: Vec<MergedRoad>) -> Vec<MergedRoad> {
    let total = roads.len();
    let mut consumed = FixedBitSet::with_capacity(total);
    let mut finished = Vec::with_capacity(total);

    for i in 0..total {
        if consumed.contains(i) {
            continue;
        }
        consumed.insert(i);
        let mut current = roads[i].clone();

        loop {
            let candidate =
                (0..total).find(|&j| !consumed.contains(j) && can_connect(&current, &roads[j]));
            let Some(j) = candidate else { break };

            debug!("joining way {} onto {}", roads[j].id, current.id);
            current = connect(current, roads[j].clone());
            consumed.insert(j);
        }

        current.is_connected = current.id.contains(MERGE_SEPARATOR);
        current.metrics = match compute_metrics(&current.geometry) {
            Ok(metrics) => metrics,
            // Too few points to measure twistiness on; the length still
            // matters for ordering and display.
            Err(_) => RoadMetrics {
                length_m: length_meters(&current.geometry),
                ..RoadMetrics::default()
            },
        };
        finished.push(current);
    }

    finished.sort_by(|a, b| b.metrics.length_m.total_cmp(&a.metrics.length_m));
    finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tags;

    fn road(id: &str, name: &str, points: &[(f64, f64)]) -> MergedRoad {
        MergedRoad {
            id: id.to_string(),
            name: name.to_string(),
            geometry: LineString::new(
                points.iter().map(|&(lat, lon)| Coord { x: lon, y: lat }).collect(),
            ),
            tags: Tags::new(),
            metrics: RoadMetrics::default(),
            is_connected: false,
        }
    }

    fn unnamed(id: &str, points: &[(f64, f64)]) -> MergedRoad {
        road(id, UNNAMED_ROAD, points)
    }

    #[test]
    fn differently_named_roads_never_connect() {
        let r1 = road("1", "Alsungas iela", &[(57.0, 27.0), (57.01, 27.0)]);
        let r2 = road("2", "Braslas iela", &[(57.01, 27.0), (57.02, 27.0)]);
        assert!(!can_connect(&r1, &r2));

        let r2_unnamed = unnamed("2", &[(57.01, 27.0), (57.02, 27.0)]);
        assert!(can_connect(&r1, &r2_unnamed));
    }

    #[test]
    fn endpoints_beyond_tolerance_do_not_connect() {
        // ~111 m of latitude between the closest endpoints.
        let r1 = unnamed("1", &[(57.0, 27.0), (57.01, 27.0)]);
        let r2 = unnamed("2", &[(57.011, 27.0), (57.02, 27.0)]);
        assert!(!can_connect(&r1, &r2));

        // ~33 m is within the 50 m tolerance.
        let r3 = unnamed("3", &[(57.0103, 27.0), (57.02, 27.0)]);
        assert!(can_connect(&r1, &r3));
    }

    #[test]
    fn closest_pairing_wins_start_start_with_reversal() {
        // start-start is ~10 m apart, end-start ~210 m: the merge must
        // reverse r1 and prepend it, not append r2 to r1's end.
        let r1 = unnamed("1", &[(0.0, 0.0), (-0.0018, 0.0)]);
        let r2 = unnamed("2", &[(0.00009, 0.0), (0.01, 0.0)]);

        let merged = connect(r1, r2);
        assert_eq!(merged.id, "1_2");
        let first = merged.geometry.0[0];
        let last = merged.geometry.0[merged.geometry.0.len() - 1];
        assert_eq!((first.y, first.x), (-0.0018, 0.0));
        assert_eq!((last.y, last.x), (0.01, 0.0));
    }

    #[test]
    fn merge_keeps_first_name_and_overlays_tags() {
        let mut r1 = road("10", "Kalna iela", &[(57.0, 27.0), (57.01, 27.0)]);
        r1.tags.insert("highway".to_string(), "tertiary".to_string());
        r1.tags.insert("surface".to_string(), "asphalt".to_string());
        let mut r2 = road("11", "Kalna iela", &[(57.01, 27.0), (57.02, 27.0)]);
        r2.tags.insert("surface".to_string(), "gravel".to_string());

        let merged = connect(r1, r2);
        assert_eq!(merged.name, "Kalna iela");
        assert_eq!(merged.tags.get("highway").unwrap(), "tertiary");
        // The later constituent wins on key collisions.
        assert_eq!(merged.tags.get("surface").unwrap(), "gravel");
    }

    #[test]
    fn chain_merges_through_middle_segment() {
        // A touches B and B touches C, but A and C are ~1.1 km apart.
        let a = unnamed("1", &[(57.0, 27.0), (57.0, 27.01)]);
        let b = unnamed("2", &[(57.0, 27.01), (57.0, 27.02)]);
        let c = unnamed("3", &[(57.0, 27.02), (57.0, 27.03)]);
        assert!(!can_connect(&a, &c));

        let stitched = stitch_segments(vec![a, b, c]);
        assert_eq!(stitched.len(), 1);
        assert_eq!(stitched[0].id, "1_2_3");
        assert!(stitched[0].is_connected);
        assert_eq!(stitched[0].geometry.0.len(), 6);
    }

    #[test]
    fn merge_grouping_follows_input_order() {
        let a = unnamed("1", &[(57.0, 27.0), (57.0, 27.01)]);
        let b = unnamed("2", &[(57.0, 27.01), (57.0, 27.02)]);
        let c = unnamed("3", &[(57.0, 27.02), (57.0, 27.03)]);

        // Starting from B, the first connectable candidate in list
        // order is A, then the grown chain picks up C.
        let stitched = stitch_segments(vec![b.clone(), a.clone(), c.clone()]);
        assert_eq!(stitched[0].id, "2_1_3");

        let stitched = stitch_segments(vec![a, b, c]);
        assert_eq!(stitched[0].id, "1_2_3");
    }

    #[test]
    fn unconnectable_segments_pass_through() {
        let r1 = unnamed("1", &[(57.0, 27.0), (57.0, 27.01)]);
        let r2 = unnamed("2", &[(58.0, 28.0), (58.0, 28.02)]);

        let stitched = stitch_segments(vec![r1, r2]);
        assert_eq!(stitched.len(), 2);
        assert!(stitched.iter().all(|road| !road.is_connected));
        // Sorted longest first: r2 spans twice the longitude.
        assert_eq!(stitched[0].id, "2");
        assert_eq!(stitched[1].id, "1");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(stitch_segments(Vec::new()).is_empty());
    }

    #[test]
    fn two_nearby_segments_merge_and_sort_by_length() {
        let s1 = unnamed("1", &[(57.0, 27.0), (57.01, 27.0)]);
        let s2 = unnamed("2", &[(57.01, 27.0), (57.02, 27.0)]);
        let s3 = unnamed("3", &[(58.0, 28.0), (58.01, 28.0)]);

        let stitched = stitch_segments(vec![s1, s2, s3]);
        assert_eq!(stitched.len(), 2);

        let merged = &stitched[0];
        assert_eq!(merged.id, "1_2");
        assert!(merged.is_connected);
        // ~2.2 km merged road ahead of the ~1.1 km standalone one.
        assert!((merged.metrics.length_m - 2224.0).abs() < 10.0);

        let standalone = &stitched[1];
        assert_eq!(standalone.id, "3");
        assert!(!standalone.is_connected);
        assert!((standalone.metrics.length_m - 1112.0).abs() < 10.0);
    }
}
