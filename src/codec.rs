//
// Hashiwokakero solver: cell codec
//
// Copyright 2021 Simon Frankau
//

// The solver works on the Cell enum. Packed integer codes only exist
// at the edges: printing goes through the glyph table, and search
// fingerprints are the row-major list of codes.
//
// Code layout:
//   0       empty
//   1..=12  island, code is the domain
//   13..=18 bridge, odd codes horizontal, even codes vertical, with
//           size 1, 1, 2, 2, 3, 3 respectively.

pub const EMPTY_CODE: u8 = 0;
pub const MAX_DOMAIN: usize = 12;
// Largest bridge the encoding can represent.
pub const MAX_BRIDGE_SIZE: usize = 3;
pub const MAX_CODE: u8 = (MAX_DOMAIN + 2 * MAX_BRIDGE_SIZE) as u8;

// Indexed by code.
pub const GLYPHS: [char; MAX_CODE as usize + 1] = [
    '.', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', '-', '|', '=', '"', 'E', '#',
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    // Required number of bridge ends.
    Island(usize),
    Bridge(Orientation, usize),
}

pub fn decode(code: u8) -> Cell {
    match code {
        EMPTY_CODE => Cell::Empty,
        c if (c as usize) <= MAX_DOMAIN => Cell::Island(c as usize),
        c if c <= MAX_CODE => {
            let orientation = if c % 2 == 0 {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let size = (c as usize - MAX_DOMAIN + 1) / 2;
            Cell::Bridge(orientation, size)
        }
        c => panic!("Cell code out of range: {}", c),
    }
}

pub fn encode(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => EMPTY_CODE,
        Cell::Island(domain) => {
            assert!(
                (1..=MAX_DOMAIN).contains(&domain),
                "Island domain out of range: {}",
                domain
            );
            domain as u8
        }
        Cell::Bridge(orientation, size) => {
            assert!(
                (1..=MAX_BRIDGE_SIZE).contains(&size),
                "Bridge size out of range: {}",
                size
            );
            let code = MAX_DOMAIN + 2 * size;
            match orientation {
                Orientation::Horizontal => (code - 1) as u8,
                Orientation::Vertical => code as u8,
            }
        }
    }
}

pub fn is_bridge_glyph(c: char) -> bool {
    GLYPHS[MAX_DOMAIN + 1..].contains(&c)
}

pub fn bridge_size(code: u8) -> usize {
    match decode(code) {
        Cell::Bridge(_, size) => size,
        _ => 0,
    }
}

impl Cell {
    // Only empty cells and islands are accepted on input.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            '1'..='9' | 'a'..='c' => c.to_digit(16).map(|d| Cell::Island(d as usize)),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        GLYPHS[encode(self) as usize]
    }

    pub fn domain(self) -> Option<usize> {
        match self {
            Cell::Island(domain) => Some(domain),
            _ => None,
        }
    }

    pub fn bridge_size(self) -> usize {
        match self {
            Cell::Bridge(_, size) => size,
            _ => 0,
        }
    }
}

////////////////////////////////////////////////////////////////////////
// Tests
//
