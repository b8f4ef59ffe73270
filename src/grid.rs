// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

use crate::{earth_distance, GeoPoint, Obstacle};

/// Largest allowed number of rows or columns in a search grid. Keeps the
/// lattice arithmetic inside `i32` and stops a microscopic cell size from
/// degenerating the grid instead of failing typed.
pub(crate) const MAX_CELLS_PER_AXIS: f64 = 16_777_216.0; // 2^24

/// Relative offsets of the 8 surrounding cells.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A coordinate on the search lattice. Internal to the crate;
/// callers only ever see [GeoPoints](GeoPoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    /// True if `other` is this cell or one of its 8 neighbors
    /// (Chebyshev distance at most 1).
    pub fn is_adjacent(self, other: GridCell) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

/// A uniform lat-lon lattice covering the search area.
///
/// Cell `(0, 0)` is centered on `origin`; rows grow north and columns east,
/// each by `cell_size` degrees. [Grid::snap] and [Grid::cell_to_point] are
/// inverse operations: a cell center snaps back to the same cell, and any
/// point snaps to a center at most half a cell away along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Grid {
    origin: GeoPoint,
    cell_size: f64,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Builds the smallest grid whose cells cover both `a` and `b` after
    /// expanding their bounding box by `margin` degrees on every side.
    /// The margin leaves room for detours around obstacles sitting on
    /// the direct line.
    ///
    /// Returns `None` when the requested resolution would need more than
    /// [MAX_CELLS_PER_AXIS] rows or columns, which would overflow the
    /// lattice coordinates.
    pub fn covering(a: GeoPoint, b: GeoPoint, margin: f64, cell_size: f64) -> Option<Self> {
        let min_lat = a.lat.min(b.lat) - margin;
        let max_lat = a.lat.max(b.lat) + margin;
        let min_lon = a.lon.min(b.lon) - margin;
        let max_lon = a.lon.max(b.lon) + margin;

        let rows = ((max_lat - min_lat) / cell_size).ceil() + 1.0;
        let cols = ((max_lon - min_lon) / cell_size).ceil() + 1.0;
        if !(rows <= MAX_CELLS_PER_AXIS) || !(cols <= MAX_CELLS_PER_AXIS) {
            return None;
        }

        Some(Self {
            origin: GeoPoint::new(min_lat, min_lon),
            cell_size,
            rows: rows as i32,
            cols: cols as i32,
        })
    }

    /// Discretizes a point to its nearest cell. The result may lie outside
    /// the grid bounds; check with [Grid::contains] before expanding it.
    pub fn snap(&self, point: GeoPoint) -> GridCell {
        GridCell {
            row: ((point.lat - self.origin.lat) / self.cell_size).round() as i32,
            col: ((point.lon - self.origin.lon) / self.cell_size).round() as i32,
        }
    }

    /// Returns the center of a cell.
    pub fn cell_to_point(&self, cell: GridCell) -> GeoPoint {
        GeoPoint::new(
            self.origin.lat + cell.row as f64 * self.cell_size,
            self.origin.lon + cell.col as f64 * self.cell_size,
        )
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Iterates over the in-bounds cells among the 8 neighbors of `cell`.
    pub fn neighbors(&self, cell: GridCell) -> impl Iterator<Item = GridCell> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let neighbor = GridCell {
                row: cell.row + dr,
                col: cell.col + dc,
            };
            self.contains(neighbor).then_some(neighbor)
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }
}

/// Checks whether a point lies within `clearance` meters of any obstacle.
///
/// The interval is open: a point exactly at the clearance boundary is NOT
/// blocked. An empty obstacle list blocks nothing.
pub fn is_blocked(point: GeoPoint, obstacles: &[Obstacle], clearance: f64) -> bool {
    obstacles
        .iter()
        .any(|o| earth_distance(point, o.position) < clearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_grid() -> Grid {
        Grid::covering(
            GeoPoint::new(37.5665, 126.9780),
            GeoPoint::new(37.5700, 126.9820),
            0.005,
            0.001,
        )
        .unwrap()
    }

    #[test]
    fn covering_rejects_oversized_lattices() {
        let a = GeoPoint::new(37.5665, 126.9780);
        let b = GeoPoint::new(37.5700, 126.9820);

        // A microscopic cell size would need more lattice coordinates than
        // fit on an axis; an oversized margin fails the same way
        assert!(Grid::covering(a, b, 0.005, 1e-12).is_none());
        assert!(Grid::covering(a, b, 1e9, 0.001).is_none());
        assert!(Grid::covering(a, b, 0.005, 0.001).is_some());
    }

    #[test]
    fn snap_round_trip_is_idempotent() {
        let grid = test_grid();

        for &point in &[
            GeoPoint::new(37.5665, 126.9780),
            GeoPoint::new(37.5700, 126.9820),
            GeoPoint::new(37.5683, 126.9794),
        ] {
            let cell = grid.snap(point);
            let center = grid.cell_to_point(cell);
            assert_eq!(grid.snap(center), cell);

            // A point snaps to a center at most half a cell away on each axis
            assert!((center.lat - point.lat).abs() <= 0.001 * 0.5 + 1e-12);
            assert!((center.lon - point.lon).abs() <= 0.001 * 0.5 + 1e-12);
        }
    }

    #[test]
    fn covering_includes_both_endpoints() {
        let grid = test_grid();
        assert!(grid.contains(grid.snap(GeoPoint::new(37.5665, 126.9780))));
        assert!(grid.contains(grid.snap(GeoPoint::new(37.5700, 126.9820))));
        assert!(!grid.contains(GridCell { row: -1, col: 0 }));
        assert!(!grid.contains(GridCell {
            row: grid.rows(),
            col: 0
        }));
    }

    #[test]
    fn neighbors_are_adjacent_and_in_bounds() {
        let grid = test_grid();
        let cell = grid.snap(GeoPoint::new(37.5683, 126.9794));

        let neighbors: Vec<GridCell> = grid.neighbors(cell).collect();
        assert_eq!(neighbors.len(), 8);
        for n in neighbors {
            assert!(n != cell);
            assert!(cell.is_adjacent(n));
            assert!(grid.contains(n));
        }

        // A corner cell only has 3 in-bounds neighbors
        let corner = GridCell { row: 0, col: 0 };
        assert_eq!(grid.neighbors(corner).count(), 3);
    }

    #[test]
    fn blocked_boundary_is_open() {
        let booth = Obstacle::at(37.5680, 126.9800);
        let point = GeoPoint::new(37.5690, 126.9800);
        let d = earth_distance(point, booth.position);

        assert!(!is_blocked(point, &[booth], d));
        assert!(is_blocked(point, &[booth], d + 0.001));
        assert!(!is_blocked(point, &[], f64::INFINITY));
    }
}
