// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

//! Obstacle-avoiding walking routes over a geographic grid.
//!
//! Given a start point, a goal point, and a set of positions to keep clear of
//! (e.g. smoking booths), sidestep discretizes the surrounding area into a
//! uniform lat-lon lattice and runs [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! over the 8-connected grid. Every interior waypoint of the returned path keeps
//! at least the configured clearance from every obstacle; the start and goal
//! are returned verbatim.
//!
//! # Example
//!
//! ```
//! let start = sidestep::GeoPoint::new(37.5665, 126.9780);
//! let goal = sidestep::GeoPoint::new(37.5700, 126.9820);
//! let booths = [sidestep::Obstacle::at(37.5680, 126.9800)];
//!
//! let path = sidestep::find_path(start, goal, &booths, &sidestep::Options::default())
//!     .expect("failed to find a path");
//!
//! println!("{} waypoints, {:.0} m", path.len(), sidestep::path_length(&path));
//! ```

mod astar;
mod distance;
mod grid;
mod simplify;

pub use astar::{
    find_path, Options, PlanError, DEFAULT_CELL_SIZE, DEFAULT_CLEARANCE, DEFAULT_MARGIN,
    DEFAULT_STEP_LIMIT,
};
pub use distance::{earth_distance, path_length};
pub use grid::is_blocked;
pub use simplify::simplify_path;

/// A position on Earth: latitude and longitude, in degrees.
///
/// Used for the start and goal of a search, for [Obstacle] positions,
/// and for the waypoints of a returned path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// A position which paths must keep clear of.
///
/// The avoidance radius is uniform across all obstacles and travels in
/// [Options::clearance]; obstacles themselves only carry a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: GeoPoint,
}

impl Obstacle {
    pub const fn at(lat: f64, lon: f64) -> Self {
        Self {
            position: GeoPoint::new(lat, lon),
        }
    }
}
