// (c) Copyright 2026 The sidestep contributors
// SPDX-License-Identifier: MIT

mod error;
mod search;

pub use error::{PlanError, DEFAULT_STEP_LIMIT};
pub use search::{find_path, Options, DEFAULT_CELL_SIZE, DEFAULT_CLEARANCE, DEFAULT_MARGIN};
