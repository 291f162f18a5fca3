//
// Hashiwokakero solver: solver configuration
//
// Copyright 2021 Simon Frankau
//

use anyhow::{ensure, Result};

use crate::codec::MAX_BRIDGE_SIZE;

// Canonical Hashiwokakero allows at most two parallel bridges.
pub const DEFAULT_MAX_BRIDGES: usize = 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    // Maximum number of bridges between a pair of islands.
    pub max_bridges: usize,
    // Stop searching after expanding this many states. The visited set
    // grows with the states expanded, so this bounds it too.
    pub max_states: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            max_bridges: DEFAULT_MAX_BRIDGES,
            max_states: None,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            1 <= self.max_bridges && self.max_bridges <= MAX_BRIDGE_SIZE,
            "--max-bridges must be between 1 and {}",
            MAX_BRIDGE_SIZE
        );
        ensure!(self.max_states != Some(0), "--max-states must be positive");
        Ok(())
    }
}
