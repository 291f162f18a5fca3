//
// Hashiwokakero solver
//
// Copyright 2021 Simon Frankau
//

// Islands and bridges share one grid. Solving is a propagation pass
// that lays every forced bridge, followed by a depth-first search over
// the remaining choices.

pub mod codec;
pub mod config;
pub mod format;
pub mod grid;
pub mod navigator;
pub mod propagate;
pub mod search;

pub use codec::{Cell, Orientation};
pub use config::{SolverConfig, DEFAULT_MAX_BRIDGES};
pub use format::{display_grid, display_grid_coloured, read_grid};
pub use grid::{Direction, Grid, Pos};
pub use propagate::simplify;
pub use search::{solve, solve_with_report, Report, Search, SearchFailure, Statistics};
