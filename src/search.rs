//
// Hashiwokakero solver: backtracking search
//
// Copyright 2021 Simon Frankau
//

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use thiserror::Error;

use crate::config::SolverConfig;
use crate::grid::{Fingerprint, Grid, Pos};
use crate::navigator::{adjacent_paths, count_components, remaining, restricted_domain};
use crate::propagate::simplify;

#[derive(Debug, Eq, Error, PartialEq)]
pub enum SearchFailure {
    // Every reachable state has been tried.
    #[error("No solution is possible for this puzzle")]
    NoSolutions,
    // The state limit ran out first, so nothing is proven.
    #[error("Search gave up after {states} states")]
    GaveUp { states: usize },
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    pub expanded: usize,
    pub pushed: usize,
    pub pruned: usize,
    pub duplicates: usize,
    pub max_stack: usize,
}

////////////////////////////////////////////////////////////////////////
// State checks
//

// We have a solution if there's a single component and every island in
// it is satisfied. A closed component alongside anything else can
// never be joined up, so that's a dead end.
fn is_solved(grid: &Grid) -> Result<bool, SearchFailure> {
    let components = count_components(grid);

    if components.total() == 0 {
        // No islands, nothing to do.
        Ok(true)
    } else if components.closed > 0 {
        if components.total() == 1 {
            Ok(true)
        } else {
            Err(SearchFailure::NoSolutions)
        }
    } else {
        Ok(false)
    }
}

// How many more bridge ends the island could pick up from its live
// neighbours, ignoring the one at `partner`.
fn supply(grid: &Grid, island: Pos, partner: Option<Pos>, max_bridges: usize) -> usize {
    adjacent_paths(grid, island)
        .iter()
        .flatten()
        .filter(|path| Some(path.destination()) != partner)
        .map(|path| {
            let room = max_bridges.saturating_sub(path.link_size(grid));
            room.min(remaining(grid, path.destination()))
        })
        .sum()
}

// An island that needs more than all its live links could ever bring
// can't be satisfied from here.
fn has_stranded_island(grid: &Grid, max_bridges: usize) -> bool {
    grid.island_iter()
        .any(|pos| remaining(grid, pos) > supply(grid, pos, None, max_bridges))
}

////////////////////////////////////////////////////////////////////////
// Search
//

// Depth-first search over bridge placements. Every stack entry owns its
// grid, so branches never see each other's changes.
pub struct Search {
    max_bridges: usize,
    max_states: Option<usize>,
    stack: Vec<Grid>,
    visited: HashSet<Fingerprint>,
    stats: Statistics,
}

impl Search {
    pub fn new(config: &SolverConfig) -> Search {
        Search {
            max_bridges: config.max_bridges,
            max_states: config.max_states,
            stack: Vec::new(),
            visited: HashSet::new(),
            stats: Statistics::default(),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn run(&mut self, grid: Grid) -> Result<Grid, SearchFailure> {
        self.visited.insert(grid.fingerprint());
        self.stack.push(grid);

        while let Some(grid) = self.stack.pop() {
            match is_solved(&grid) {
                Ok(true) => {
                    info!(
                        "Solved after expanding {} states ({} visited)",
                        self.stats.expanded,
                        self.visited.len()
                    );
                    return Ok(grid);
                }
                Ok(false) => (),
                Err(_) => {
                    self.stats.pruned += 1;
                    continue;
                }
            }

            if has_stranded_island(&grid, self.max_bridges) {
                self.stats.pruned += 1;
                continue;
            }

            if let Some(limit) = self.max_states {
                if self.stats.expanded >= limit {
                    info!("Giving up after {} states", self.stats.expanded);
                    return Err(SearchFailure::GaveUp {
                        states: self.stats.expanded,
                    });
                }
            }

            self.stats.expanded += 1;
            self.expand(&grid);
            self.stats.max_stack = self.stats.max_stack.max(self.stack.len());
            trace!(
                "Expanded state {}, stack depth {}",
                self.stats.expanded,
                self.stack.len()
            );
        }

        debug!("Search space exhausted: {:?}", self.stats);
        Err(SearchFailure::NoSolutions)
    }

    // Push every way of widening one link by any amount that leaves
    // both ends still satisfiable by their other neighbours.
    fn expand(&mut self, grid: &Grid) {
        for origin in grid.island_iter() {
            if restricted_domain(grid, origin) == 0 {
                continue;
            }
            let need = remaining(grid, origin);

            for path in adjacent_paths(grid, origin).iter().flatten() {
                let partner = path.destination();
                let partner_need = remaining(grid, partner);
                let existing = path.link_size(grid);
                let max_size = self
                    .max_bridges
                    .min(existing + need)
                    .min(existing + partner_need);
                if max_size <= existing {
                    continue;
                }

                let origin_supply = supply(grid, origin, Some(partner), self.max_bridges);
                let partner_supply = supply(grid, partner, Some(origin), self.max_bridges);

                for size in (existing + 1)..=max_size {
                    let added = size - existing;
                    // Arc consistency: whatever this link doesn't carry
                    // must come from elsewhere.
                    if need - added > origin_supply || partner_need - added > partner_supply {
                        self.stats.pruned += 1;
                        continue;
                    }

                    let mut child = grid.clone();
                    path.paint(&mut child, size);
                    // Marked on push, so a grid reachable from several
                    // parents is only ever stacked once.
                    if !self.visited.insert(child.fingerprint()) {
                        self.stats.duplicates += 1;
                        continue;
                    }
                    self.stack.push(child);
                    self.stats.pushed += 1;
                }
            }
        }
    }
}

// Where the time went, and how much searching was needed.
#[derive(Clone, Debug)]
pub struct Report {
    pub propagation: Duration,
    pub search: Duration,
    pub statistics: Statistics,
}

// Propagate, then search what's left.
pub fn solve_with_report(
    grid: &Grid,
    config: &SolverConfig,
) -> (Result<Grid, SearchFailure>, Report) {
    let start = Instant::now();
    let simplified = simplify(grid, config.max_bridges);
    let propagation = start.elapsed();

    let start = Instant::now();
    let mut search = Search::new(config);
    let result = search.run(simplified);
    let report = Report {
        propagation,
        search: start.elapsed(),
        statistics: search.statistics().clone(),
    };
    debug!("Search statistics: {:?}", report.statistics);

    (result, report)
}

pub fn solve(grid: &Grid, config: &SolverConfig) -> Result<Grid, SearchFailure> {
    solve_with_report(grid, config).0
}

////////////////////////////////////////////////////////////////////////
// Tests
//
