// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap};

use crate::grid::{Grid, GridCell};
use crate::{earth_distance, is_blocked, GeoPoint, Obstacle, PlanError, DEFAULT_STEP_LIMIT};

/// Default lattice resolution, in degrees. Roughly 111 m of latitude per cell.
pub const DEFAULT_CELL_SIZE: f64 = 0.001;

/// Default minimum distance between any interior waypoint and any obstacle,
/// in meters.
pub const DEFAULT_CLEARANCE: f64 = 150.0;

/// Default expansion of the start-goal bounding box on every side,
/// in degrees. Gives detours room to swing around obstacles sitting
/// on the direct line.
pub const DEFAULT_MARGIN: f64 = 0.005;

/// Tunable parameters for [find_path].
///
/// The grid resolution trades accuracy for speed: a finer grid hugs
/// obstacles more closely but expands more cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Lattice resolution in degrees. Must be positive.
    /// Defaults to [DEFAULT_CELL_SIZE].
    pub cell_size: f64,

    /// Minimum distance between any interior waypoint and any obstacle,
    /// in meters. Must be positive. Defaults to [DEFAULT_CLEARANCE].
    pub clearance: f64,

    /// Expansion of the start-goal bounding box on every side, in degrees.
    /// Must be finite and non-negative. Defaults to [DEFAULT_MARGIN].
    pub margin: f64,

    /// Limit on the number of expanded cells before the search gives up
    /// with [PlanError::SearchExhausted]. Defaults to [DEFAULT_STEP_LIMIT].
    pub step_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            clearance: DEFAULT_CLEARANCE,
            margin: DEFAULT_MARGIN,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    at: GridCell,
    cost: f64,
    estimate: f64,
    score: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower scores are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        //
        // Equal scores are broken by the lower heuristic estimate (the cell
        // closer to the goal), which keeps expansion order deterministic.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                other
                    .estimate
                    .partial_cmp(&self.estimate)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

fn validate(
    start: GeoPoint,
    goal: GeoPoint,
    obstacles: &[Obstacle],
    options: &Options,
) -> Result<(), PlanError> {
    if !start.is_finite() {
        return Err(PlanError::InvalidInput("start coordinates must be finite"));
    }
    if !goal.is_finite() {
        return Err(PlanError::InvalidInput("goal coordinates must be finite"));
    }
    if obstacles.iter().any(|o| !o.position.is_finite()) {
        return Err(PlanError::InvalidInput(
            "obstacle coordinates must be finite",
        ));
    }
    if !(options.cell_size > 0.0) || !options.cell_size.is_finite() {
        return Err(PlanError::InvalidInput("cell size must be positive"));
    }
    if !(options.clearance > 0.0) || !options.clearance.is_finite() {
        return Err(PlanError::InvalidInput("clearance radius must be positive"));
    }
    if !(options.margin >= 0.0) || !options.margin.is_finite() {
        return Err(PlanError::InvalidInput("margin must be non-negative"));
    }
    Ok(())
}

/// Walks the back-pointers from the final cell to the start cell, then stitches
/// the verbatim endpoints back in: `start`, the interior cell centers, `goal`.
/// The start cell's center is dropped in favor of `start` itself.
fn assemble_path(
    start: GeoPoint,
    goal: GeoPoint,
    grid: &Grid,
    came_from: &HashMap<GridCell, GridCell>,
    mut last: GridCell,
) -> Vec<GeoPoint> {
    let mut cells = vec![last];

    while let Some(&cell) = came_from.get(&last) {
        cells.push(cell);
        last = cell;
    }

    cells.reverse();

    let mut path = Vec::with_capacity(cells.len() + 1);
    path.push(start);
    path.extend(cells.iter().skip(1).map(|&cell| grid.cell_to_point(cell)));
    path.push(goal);
    return path;
}

/// Uses the [A* algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// to find a walking path from `start` to `goal` whose every interior waypoint
/// keeps at least `options.clearance` meters from every obstacle.
///
/// The area between the two points, expanded by `options.margin`, is
/// discretized into a lattice of `options.cell_size` degrees and searched as
/// an 8-connected graph. Step costs and the heuristic both use
/// [earth_distance], so diagonal steps cost their true geometric length and
/// the heuristic never overestimates. Ties are broken towards the goal,
/// which makes the result reproducible: identical inputs yield identical
/// paths.
///
/// The returned path starts with `start` and ends with `goal` verbatim; only
/// the interior waypoints are grid-snapped. If both points fall into the same
/// cell, `[start, goal]` is returned without running the search.
///
/// Fails with [PlanError::NoPathFound] when an endpoint is blocked or the
/// goal cannot be reached inside the search area, and with
/// [PlanError::SearchExhausted] when more than `options.step_limit` cells
/// were expanded. A path straight through an obstacle is never returned;
/// fallback behavior on failure is the caller's decision.
pub fn find_path(
    start: GeoPoint,
    goal: GeoPoint,
    obstacles: &[Obstacle],
    options: &Options,
) -> Result<Vec<GeoPoint>, PlanError> {
    validate(start, goal, obstacles, options)?;

    let grid = Grid::covering(start, goal, options.margin, options.cell_size).ok_or(
        PlanError::InvalidInput("cell size is too small for the search area"),
    )?;
    let start_cell = grid.snap(start);
    let goal_cell = grid.snap(goal);

    if start_cell == goal_cell {
        return Ok(vec![start, goal]);
    }

    if is_blocked(start, obstacles, options.clearance)
        || is_blocked(goal, obstacles, options.clearance)
    {
        return Err(PlanError::NoPathFound);
    }

    log::debug!(
        "searching a {}x{} cell grid with {} obstacle(s)",
        grid.rows(),
        grid.cols(),
        obstacles.len(),
    );

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: HashMap<GridCell, GridCell> = HashMap::default();
    let mut known_costs: HashMap<GridCell, f64> = HashMap::default();
    let mut steps: usize = 0;

    {
        let initial_estimate = earth_distance(grid.cell_to_point(start_cell), goal);
        queue.push(QueueItem {
            at: start_cell,
            cost: 0.0,
            estimate: initial_estimate,
            score: initial_estimate,
        });
        known_costs.insert(start_cell, 0.0);
    }

    while let Some(item) = queue.pop() {
        if item.at.is_adjacent(goal_cell) {
            log::debug!("found a path after expanding {} cell(s)", steps);
            return Ok(assemble_path(start, goal, &grid, &came_from, item.at));
        }

        // Contrary to the wikipedia definition, we might keep multiple items in the queue for the same cell.
        if item.cost > known_costs.get(&item.at).cloned().unwrap_or(f64::INFINITY) {
            continue;
        }

        steps += 1;
        if steps > options.step_limit {
            return Err(PlanError::SearchExhausted);
        }

        let here = grid.cell_to_point(item.at);
        for neighbor in grid.neighbors(item.at) {
            let point = grid.cell_to_point(neighbor);
            if is_blocked(point, obstacles, options.clearance) {
                continue;
            }

            // Check if this is the cheapest way to the neighbor
            let neighbor_cost = item.cost + earth_distance(here, point);
            if neighbor_cost
                >= known_costs
                    .get(&neighbor)
                    .cloned()
                    .unwrap_or(f64::INFINITY)
            {
                continue;
            }

            // Push the new item into the queue
            came_from.insert(neighbor, item.at);
            known_costs.insert(neighbor, neighbor_cost);
            let estimate = earth_distance(point, goal);
            queue.push(QueueItem {
                at: neighbor,
                cost: neighbor_cost,
                estimate,
                score: neighbor_cost + estimate,
            });
        }
    }

    Err(PlanError::NoPathFound)
}
