// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

/// Recommended number of allowed cell expansions in
/// [find_path](crate::find_path) before [PlanError::SearchExhausted]
/// is returned.
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

/// Error conditions which may occur during [find_path](crate::find_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The start, goal or an obstacle coordinate is not a finite number,
    /// one of the [Options](crate::Options) is out of range, or the
    /// requested grid resolution is too fine for the search area. Reported
    /// before any search work begins.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Every reachable cell was expanded without getting next to the goal.
    /// The goal is enclosed by obstacles, an endpoint sits inside an
    /// obstacle's clearance, or the detour would leave the search area.
    ///
    /// Falling back (e.g. drawing the direct line with a warning) is the
    /// caller's decision; the search never returns a path that violates
    /// clearance.
    #[error("no path found within the search area")]
    NoPathFound,

    /// Path search has exceeded its limit of steps.
    ///
    /// Concluding that no path exists requires expanding every reachable
    /// cell, which on a fine grid can take arbitrarily long. The step limit
    /// keeps worst-case latency predictable.
    #[error("step limit exceeded")]
    SearchExhausted,
}
