//
// Hashiwokakero solver: forced-bridge propagation
//
// Copyright 2021 Simon Frankau
//

use log::{debug, info};

use crate::grid::{Direction, Grid, Pos};
use crate::navigator::{adjacent_path, adjacent_paths, remaining, restricted_domain};

// A bridge the rules say must be at least this wide.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Step {
    origin: Pos,
    dir: Direction,
    size: usize,
}

// Decide the minimum width forced onto every live direction of an
// island, if any. `domain` is the restricted domain, `count` the
// number of live directions.
fn forced_size(domain: usize, count: usize, max_bridges: usize) -> Option<usize> {
    if count == 0 || domain == 0 {
        return None;
    }

    if count == 1 && domain < max_bridges {
        // Only one way out, so it takes everything.
        Some(domain)
    } else if domain % max_bridges == 0 && count == domain / max_bridges {
        // Every link must be maximal.
        Some(max_bridges)
    } else if domain % max_bridges != 0 && count == domain / max_bridges + 1 {
        // Even with every other link maximal, each link needs one.
        Some(1)
    } else {
        None
    }
}

// Scan all islands against the same grid and collect the forced
// bridges, in island then direction order.
fn forced_steps(grid: &Grid, max_bridges: usize) -> Vec<Step> {
    let mut steps = Vec::new();

    for pos in grid.island_iter() {
        let paths = adjacent_paths(grid, pos);
        let count = paths.iter().filter(|p| p.is_some()).count();
        let domain = restricted_domain(grid, pos);

        if let Some(size) = forced_size(domain, count, max_bridges) {
            steps.extend(paths.iter().flatten().map(|path| Step {
                origin: pos,
                dir: path.direction(),
                size,
            }));
        }
    }

    steps
}

// Apply a step to the grid as it stands now. Earlier steps in the same
// pass may have blocked the path or used up an endpoint, so the path is
// rediscovered and the width clamped to what both ends can still take.
// Returns whether anything changed.
fn apply_step(grid: &mut Grid, step: &Step) -> bool {
    let path = match adjacent_path(grid, step.origin, step.dir) {
        Some(path) => path,
        None => return false,
    };

    let existing = path.link_size(grid);
    let room = remaining(grid, step.origin).min(remaining(grid, path.destination()));
    let size = step.size.min(existing + room);
    if size <= existing {
        return false;
    }

    path.paint(grid, size);
    true
}

// Place every bridge that follows directly from island domains and
// their live neighbours, repeating until nothing more can be placed.
// Works on a copy: the input grid is left alone.
pub fn simplify(grid: &Grid, max_bridges: usize) -> Grid {
    assert!(max_bridges > 0, "Bridge cap must be positive");

    let mut grid = grid.clone();
    let mut passes = 0;
    let mut placed = 0;

    loop {
        passes += 1;
        let steps = forced_steps(&grid, max_bridges);
        let applied = steps
            .iter()
            .filter(|step| apply_step(&mut grid, step))
            .count();
        debug!(
            "Propagation pass {}: {} forced links, {} widened",
            passes,
            steps.len(),
            applied
        );

        placed += applied;
        if applied == 0 {
            break;
        }
    }

    info!(
        "Propagation reached a fixed point after {} passes, {} bridges placed",
        passes, placed
    );
    grid
}

////////////////////////////////////////////////////////////////////////
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_BRIDGES;
    use crate::format::{display_grid, read_grid};
    use crate::navigator::is_satisfied;

    fn grid(input: &str) -> Grid {
        read_grid(input.lines()).unwrap()
    }

    fn spaceless(s: &str) -> String {
        let mut out = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    #[test]
    fn test_forced_size_cap_two() {
        // Single connection.
        assert_eq!(forced_size(1, 1, 2), Some(1));
        assert_eq!(forced_size(2, 1, 2), Some(2));
        // Fully saturating.
        assert_eq!(forced_size(4, 2, 2), Some(2));
        assert_eq!(forced_size(8, 4, 2), Some(2));
        // Partial saturation.
        assert_eq!(forced_size(3, 2, 2), Some(1));
        assert_eq!(forced_size(5, 3, 2), Some(1));
        assert_eq!(forced_size(7, 4, 2), Some(1));
        // Nothing forced.
        assert_eq!(forced_size(2, 2, 2), None);
        assert_eq!(forced_size(4, 3, 2), None);
        assert_eq!(forced_size(0, 0, 2), None);
        assert_eq!(forced_size(3, 1, 2), None);
    }

    #[test]
    fn test_forced_size_cap_three() {
        assert_eq!(forced_size(2, 1, 3), Some(2));
        assert_eq!(forced_size(3, 1, 3), Some(3));
        assert_eq!(forced_size(6, 2, 3), Some(3));
        assert_eq!(forced_size(4, 2, 3), Some(1));
        assert_eq!(forced_size(6, 3, 3), None);
    }

    #[test]
    fn test_single_pair() {
        let g = grid("2.2");
        let s = simplify(&g, DEFAULT_MAX_BRIDGES);
        assert_eq!(display_grid(&s), "2=2\n");
        // Input is untouched.
        assert_eq!(display_grid(&g), "2.2\n");
    }

    #[test]
    fn test_simplify_solves_easy_puzzle() {
        let g = grid(
            ".3..1
             .....
             .3.2.
             .....
             ...2.
             .....
             1..2.",
        );
        let s = simplify(&g, DEFAULT_MAX_BRIDGES);

        let expected = spaceless(
            ".3--1
             .\"...
             .3-2.
             ...|.
             ...2.
             ...|.
             1--2.",
        );
        assert_eq!(display_grid(&s), expected);
        assert!(s.island_iter().all(|pos| is_satisfied(&s, pos)));
    }

    #[test]
    fn test_simplify_five_by_five() {
        let g = grid(
            "2.4.1
             .....
             ..3..
             .....
             1.1..",
        );
        let s = simplify(&g, DEFAULT_MAX_BRIDGES);

        let expected = spaceless(
            "2-4-1
             |.\"..
             |.3..
             |.|..
             1.1..",
        );
        assert_eq!(display_grid(&s), expected);
    }

    #[test]
    fn test_simplify_is_idempotent() {
        for input in [
            ".2.1.\n.....\n.2.2.\n.....\n.1.2.",
            ".1.2.1.\n.......\n.2.4.2.\n.......\n.1.2.1.",
            "2.4.1\n.....\n..3..\n.....\n1.1..",
            "3.3\n...\n3.3",
        ]
        .iter()
        {
            let once = simplify(&grid(input), DEFAULT_MAX_BRIDGES);
            let twice = simplify(&once, DEFAULT_MAX_BRIDGES);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_simplify_leaves_ambiguous_puzzle() {
        // Four corners of 2 can be solved as either pair of parallel
        // sides, so there's nothing forced.
        let g = grid("2.2\n...\n2.2");
        let s = simplify(&g, DEFAULT_MAX_BRIDGES);
        assert_eq!(s, g);
    }

    #[test]
    fn test_simplify_does_not_overfill() {
        // Unsolvable: the 2 demands a double bridge the 1 can't take.
        let g = grid("2.1");
        let s = simplify(&g, DEFAULT_MAX_BRIDGES);
        assert_eq!(display_grid(&s), "2-1\n");
    }
}
