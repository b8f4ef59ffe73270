// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

use crate::GeoPoint;

/// Mean radius of Earth, in meters.
/// Source: https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
const EARTH_RADIUS: f64 = 6_371_008.8;

/// Mean diameter of Earth, in meters.
/// Source: https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Calculates the great-circle distance between two lat-lon positions
/// on Earth using the `haversine formula <https://en.wikipedia.org/wiki/Haversine_formula>`_.
/// Returns the result in meters.
///
/// This is the single distance function of the crate: edge costs, the A*
/// heuristic, clearance tests and path lengths all go through it, so relative
/// comparisons stay consistent.
pub fn earth_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    EARTH_DIAMETER * h.sqrt().asin()
}

/// Sums [earth_distance] over consecutive waypoint pairs, in meters.
/// An empty or single-point path has length zero.
pub fn path_length(path: &[GeoPoint]) -> f64 {
    path.windows(2).map(|w| earth_distance(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_distance_is_symmetric() {
        let a = GeoPoint::new(37.5665, 126.9780);
        let b = GeoPoint::new(37.5700, 126.9820);
        assert_eq!(earth_distance(a, b), earth_distance(b, a));
    }

    #[test]
    fn earth_distance_zero_iff_equal() {
        let a = GeoPoint::new(37.5665, 126.9780);
        assert_eq!(earth_distance(a, a), 0.0);

        let b = GeoPoint::new(37.5665, 126.97801);
        assert!(earth_distance(a, b) > 0.0);
    }

    #[test]
    fn earth_distance_city_scale() {
        // Seoul City Hall to Jongno, roughly 525 m apart
        let a = GeoPoint::new(37.5665, 126.9780);
        let b = GeoPoint::new(37.5700, 126.9820);
        let d = earth_distance(a, b);
        assert!((d - 525.0).abs() < 5.0, "unexpected distance: {}", d);
    }

    #[test]
    fn path_length_degenerate() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[GeoPoint::new(37.0, 127.0)]), 0.0);
    }

    #[test]
    fn path_length_sums_segments() {
        let a = GeoPoint::new(37.5665, 126.9780);
        let b = GeoPoint::new(37.5680, 126.9800);
        let c = GeoPoint::new(37.5700, 126.9820);
        let total = path_length(&[a, b, c]);
        assert_eq!(total, earth_distance(a, b) + earth_distance(b, c));
        assert!(total >= earth_distance(a, c));
    }
}
