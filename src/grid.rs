//
// Hashiwokakero solver: grid representation
//
// Copyright 2021 Simon Frankau
//

use crate::codec::{self, Cell, Orientation};

// (row, col), [0][0] being the NW corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Pos {
        Pos { row, col }
    }
}

// There are 4 directions from an island. The declaration order is the
// order in which everything else visits them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

pub const ALL_DIRS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

// The (row, col) steps to move N S W E respectively.
const DIRECTION_STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Direction {
    fn step(self) -> (isize, isize) {
        DIRECTION_STEPS[self as usize]
    }

    pub fn orientation(self) -> Orientation {
        if self >= Direction::West {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn flip(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

// Canonical, row-major serialisation of a grid through the codec. Used
// as the visited-set key, so equal fingerprints really are equal grids.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fingerprint(Vec<u8>);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Grid {
        assert_eq!(
            rows * cols,
            cells.len(),
            "Grid dimensions don't match cells"
        );
        Grid { rows, cols, cells }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Grid {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == width));
        Grid::new(height, width, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "Position ({}, {}) outside {}x{} grid",
            pos.row,
            pos.col,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    // The neighbouring position in the given direction, if on the grid.
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (step_row, step_col) = dir.step();
        let row = pos.row as isize + step_row;
        let col = pos.col as isize + step_col;
        if row < 0 || row >= self.rows as isize || col < 0 || col >= self.cols as isize {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }

    pub fn domain(&self, pos: Pos) -> usize {
        match self.get(pos) {
            Cell::Island(domain) => domain,
            _ => panic!("Expected island at ({}, {})", pos.row, pos.col),
        }
    }

    pub fn island_iter(&self) -> IslandIterator<'_> {
        IslandIterator::new(self)
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.cells.iter().map(|c| codec::encode(*c)).collect())
    }

    pub fn row_cells(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

// Visits island positions in row-major order.
pub struct IslandIterator<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl<'a> IslandIterator<'a> {
    fn new(grid: &'a Grid) -> IslandIterator<'a> {
        IslandIterator { grid, idx: 0 }
    }
}

impl<'a> Iterator for IslandIterator<'a> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.grid.cells.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Cell::Island(_) = self.grid.cells[idx] {
                return Some(Pos::new(idx / self.grid.cols, idx % self.grid.cols));
            }
        }
        None
    }
}

////////////////////////////////////////////////////////////////////////
// Tests
//
