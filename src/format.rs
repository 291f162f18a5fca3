//
// Hashiwokakero solver: parser and printer
//
// Copyright 2021 Simon Frankau
//

use ansi_term::Colour;
use anyhow::{anyhow, ensure, Result};

use crate::codec::{self, Cell};
use crate::grid::{Grid, Pos};
use crate::navigator;

// Whitespace and stray punctuation inside a row are skipped. Bridge
// glyphs are punctuation too, but a bridge in the input is an error.
fn is_ignorable(c: char) -> bool {
    c != '.' && !codec::is_bridge_glyph(c) && (c.is_whitespace() || c.is_ascii_punctuation())
}

fn parse_line(line: &str) -> Result<Vec<Cell>> {
    line.chars()
        .filter(|c| !is_ignorable(*c))
        .map(|c| {
            Cell::from_char(c)
                .ok_or_else(|| anyhow!("Unexpected character in input: '{}'", c))
        })
        .collect()
}

pub fn read_grid<'a, Iter: Iterator<Item = &'a str>>(lines: Iter) -> Result<Grid> {
    let grid_lines = lines
        // Trim comments and whitespace
        .map(|s| s.find('#').map_or(s, |idx| &s[..idx]).trim())
        .filter(|s| !s.is_empty())
        .map(parse_line)
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        // Lines of nothing but skipped characters count as blank
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>();

    ensure!(!grid_lines.is_empty(), "Non-empty input line expected");
    let width = grid_lines[0].len();
    ensure!(
        grid_lines.iter().all(|row| row.len() == width),
        "Not all input lines were of the same length. Rectangular input expected."
    );

    Ok(Grid::from_rows(grid_lines))
}

// Print results in the same format as input, extended with bridge
// glyphs. Each row ends in a newline.
pub fn display_grid(grid: &Grid) -> String {
    (0..grid.rows())
        .map(|row| {
            let mut line = grid
                .row_cells(row)
                .iter()
                .map(|c| c.to_char())
                .collect::<String>();
            line.push('\n');
            line
        })
        .collect()
}

// As display_grid, but satisfied islands are green and unsatisfied
// ones red.
pub fn display_grid_coloured(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for (col, cell) in grid.row_cells(row).iter().enumerate() {
            let glyph = cell.to_char().to_string();
            match cell {
                Cell::Island(_) => {
                    let colour = if navigator::is_satisfied(grid, Pos::new(row, col)) {
                        Colour::Green
                    } else {
                        Colour::Red
                    };
                    out.push_str(&colour.bold().paint(glyph).to_string());
                }
                _ => out.push_str(&glyph),
            }
        }
        out.push('\n');
    }
    out
}

////////////////////////////////////////////////////////////////////////
// Tests
//
