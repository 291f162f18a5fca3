//
// Hashiwokakero solver: island navigation
//
// Copyright 2021 Simon Frankau
//

use std::collections::HashSet;

use crate::codec::Cell;
use crate::grid::{Direction, Grid, Pos, ALL_DIRS};

// A clear run of cells from an island to its neighbour in one
// direction. The span holds the cells strictly between the two islands
// and is never empty: islands that touch cardinally can't be bridged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path {
    dir: Direction,
    span: Vec<Pos>,
    destination: Pos,
}

impl Path {
    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn span(&self) -> &[Pos] {
        &self.span
    }

    pub fn destination(&self) -> Pos {
        self.destination
    }

    // Size of the bridge already laid along this path.
    pub fn link_size(&self, grid: &Grid) -> usize {
        grid.get(self.span[0]).bridge_size()
    }

    // Lay a bridge of the given size along the path. Existing bridges
    // are only ever widened, never narrowed.
    pub fn paint(&self, grid: &mut Grid, size: usize) {
        let orientation = self.dir.orientation();
        for pos in self.span.iter().cloned() {
            match grid.get(pos) {
                Cell::Empty => (),
                Cell::Bridge(existing, n) => {
                    assert_eq!(
                        existing, orientation,
                        "Crossing bridge at ({}, {})",
                        pos.row, pos.col
                    );
                    if n >= size {
                        continue;
                    }
                }
                Cell::Island(_) => panic!("Island inside path at ({}, {})", pos.row, pos.col),
            }
            grid.set(pos, Cell::Bridge(orientation, size));
        }
    }
}

// Size of the bridge touching the island in each direction. Only the
// cell immediately next to the island is inspected.
pub fn bridge_connections(grid: &Grid, pos: Pos) -> [usize; 4] {
    let mut connections = [0; 4];
    for dir in ALL_DIRS.iter().cloned() {
        if let Some(Cell::Bridge(orientation, size)) = grid.step(pos, dir).map(|p| grid.get(p)) {
            if orientation == dir.orientation() {
                connections[dir as usize] = size;
            }
        }
    }
    connections
}

pub fn bridge_count(grid: &Grid, pos: Pos) -> usize {
    bridge_connections(grid, pos).iter().sum()
}

pub fn is_satisfied(grid: &Grid, pos: Pos) -> bool {
    bridge_count(grid, pos) == grid.domain(pos)
}

// Bridge ends the island still needs.
pub fn remaining(grid: &Grid, pos: Pos) -> usize {
    let (domain, count) = (grid.domain(pos), bridge_count(grid, pos));
    assert!(
        count <= domain,
        "Island at ({}, {}) has {} bridges for domain {}",
        pos.row,
        pos.col,
        count,
        domain
    );
    domain - count
}

pub fn adjacent_path(grid: &Grid, origin: Pos, dir: Direction) -> Option<Path> {
    // Completed islands don't get any more bridges.
    if is_satisfied(grid, origin) {
        return None;
    }

    let mut span = Vec::new();
    let mut pos = origin;
    loop {
        // Falling off the edge means there's nothing there.
        pos = grid.step(pos, dir)?;
        match grid.get(pos) {
            Cell::Empty => span.push(pos),
            Cell::Bridge(orientation, _) if orientation == dir.orientation() => span.push(pos),
            Cell::Bridge(..) => return None,
            Cell::Island(_) => {
                if span.is_empty() || is_satisfied(grid, pos) {
                    return None;
                }
                return Some(Path {
                    dir,
                    span,
                    destination: pos,
                });
            }
        }
    }
}

pub fn adjacent_paths(grid: &Grid, pos: Pos) -> [Option<Path>; 4] {
    [
        adjacent_path(grid, pos, Direction::North),
        adjacent_path(grid, pos, Direction::South),
        adjacent_path(grid, pos, Direction::West),
        adjacent_path(grid, pos, Direction::East),
    ]
}

pub fn adjacent_count(grid: &Grid, pos: Pos) -> usize {
    adjacent_paths(grid, pos)
        .iter()
        .filter(|p| p.is_some())
        .count()
}

// The domain less whatever is already committed in directions that
// can take no further bridges. This is what the remaining live
// directions have to share between them.
pub fn restricted_domain(grid: &Grid, pos: Pos) -> usize {
    let paths = adjacent_paths(grid, pos);
    let connections = bridge_connections(grid, pos);
    let dead: usize = ALL_DIRS
        .iter()
        .filter(|dir| paths[**dir as usize].is_none())
        .map(|dir| connections[*dir as usize])
        .sum();
    grid.domain(pos) - dead
}

// Follow an existing bridge from the island to whatever island it
// lands on.
pub fn bridged_neighbour(grid: &Grid, pos: Pos, dir: Direction) -> Option<Pos> {
    if bridge_connections(grid, pos)[dir as usize] == 0 {
        return None;
    }
    let mut curr = grid.step(pos, dir)?;
    loop {
        curr = grid.step(curr, dir)?;
        match grid.get(curr) {
            Cell::Island(_) => return Some(curr),
            Cell::Bridge(orientation, _) if orientation == dir.orientation() => (),
            _ => return None,
        }
    }
}

// Components of the bridge graph. A component is closed when every
// island in it is satisfied, so it can never grow again.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Components {
    pub closed: usize,
    pub open: usize,
}

impl Components {
    pub fn total(&self) -> usize {
        self.closed + self.open
    }
}

pub fn count_components(grid: &Grid) -> Components {
    let mut seen = HashSet::new();
    let mut components = Components::default();

    for root in grid.island_iter() {
        if !seen.insert(root) {
            continue;
        }

        let mut is_closed = true;
        let mut stack = vec![root];
        while let Some(pos) = stack.pop() {
            is_closed &= is_satisfied(grid, pos);
            for dir in ALL_DIRS.iter().cloned() {
                if let Some(next) = bridged_neighbour(grid, pos, dir) {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        if is_closed {
            components.closed += 1;
        } else {
            components.open += 1;
        }
    }

    components
}

////////////////////////////////////////////////////////////////////////
// Tests
//
