// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

use crate::{is_blocked, GeoPoint, Obstacle, Options};

/// Drops redundant waypoints from a path by greedy line-of-sight
/// shortcutting.
///
/// From each kept waypoint, the farthest later waypoint reachable without
/// entering any obstacle's clearance becomes the next kept waypoint. The
/// endpoints always survive, waypoints are only ever removed (never moved),
/// and replacing a polyline section with its chord cannot increase the total
/// length. Candidate shortcuts are sampled at half the grid cell size, so a
/// shortcut can never skip over a blocked cell.
///
/// [find_path](crate::find_path) returns the raw grid path; simplification
/// is a separate, opt-in step.
pub fn simplify_path(path: &[GeoPoint], obstacles: &[Obstacle], options: &Options) -> Vec<GeoPoint> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut result = vec![path[0]];
    let mut anchor = 0;

    while anchor + 1 < path.len() {
        let mut next = anchor + 1;
        for candidate in (anchor + 2..path.len()).rev() {
            if segment_is_clear(path[anchor], path[candidate], obstacles, options) {
                next = candidate;
                break;
            }
        }
        result.push(path[next]);
        anchor = next;
    }

    return result;
}

/// Samples the open segment between `a` and `b` at intervals of at most half
/// a grid cell and checks every sample against the obstacle clearance.
fn segment_is_clear(a: GeoPoint, b: GeoPoint, obstacles: &[Obstacle], options: &Options) -> bool {
    let span = (b.lat - a.lat).abs().max((b.lon - a.lon).abs());
    let steps = (span / (options.cell_size * 0.5)).ceil().max(1.0) as usize;

    for i in 1..steps {
        let t = i as f64 / steps as f64;
        let sample = GeoPoint::new(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t);
        if is_blocked(sample, obstacles, options.clearance) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{earth_distance, find_path, path_length};

    const START: GeoPoint = GeoPoint::new(37.5665, 126.9780);
    const GOAL: GeoPoint = GeoPoint::new(37.5700, 126.9820);
    const BOOTH: Obstacle = Obstacle::at(37.5680, 126.9800);

    #[test]
    fn unobstructed_path_collapses_to_its_endpoints() {
        let options = Options::default();
        let path = find_path(START, GOAL, &[], &options).unwrap();
        let simplified = simplify_path(&path, &[], &options);
        assert_eq!(simplified, vec![START, GOAL]);
    }

    #[test]
    fn simplification_never_lengthens() {
        let options = Options::default();
        let path = find_path(START, GOAL, &[BOOTH], &options).unwrap();
        let simplified = simplify_path(&path, &[BOOTH], &options);

        assert_eq!(*simplified.first().unwrap(), START);
        assert_eq!(*simplified.last().unwrap(), GOAL);
        assert!(simplified.len() <= path.len());
        assert!(path_length(&simplified) <= path_length(&path) + 1e-9);
    }

    #[test]
    fn shortcuts_do_not_cut_through_clearance() {
        let options = Options::default();
        let path = find_path(START, GOAL, &[BOOTH], &options).unwrap();
        let simplified = simplify_path(&path, &[BOOTH], &options);

        // Kept waypoints are a subset of the original, so they respect
        // clearance; the shortcut segments must as well.
        for pair in simplified.windows(2) {
            assert!(segment_is_clear(pair[0], pair[1], &[BOOTH], &options));
        }
        assert!(path_length(&simplified) > earth_distance(START, GOAL));
    }

    #[test]
    fn short_paths_are_untouched() {
        let options = Options::default();
        assert_eq!(simplify_path(&[], &[BOOTH], &options), vec![]);
        assert_eq!(simplify_path(&[START], &[BOOTH], &options), vec![START]);
        assert_eq!(
            simplify_path(&[START, GOAL], &[BOOTH], &options),
            vec![START, GOAL],
        );
    }
}
