// Crossgen – a themed crossword generator
// Copyright (C) 2026  Crossgen authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;

pub const ROWS: usize = 18;
pub const COLS: usize = 18;

/// The sentinel for a black (unfilled) square.
pub const BLACK: char = '#';

/// The ground-truth solution grid. Every cell is either [`BLACK`] or
/// an uppercase letter written there by a committed placement. The
/// grid is owned by the engine; the presentation layer only ever sees
/// it through query methods.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [char; ROWS * COLS],
}

impl Grid {
    pub fn new() -> Grid {
        Grid { cells: [BLACK; ROWS * COLS] }
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * COLS + col]
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[row * COLS + col] = ch;
    }

    pub fn is_black(&self, row: usize, col: usize) -> bool {
        self.at(row, col) == BLACK
    }

    /// Resets every cell to black.
    pub fn clear(&mut self) {
        self.cells = [BLACK; ROWS * COLS];
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                write!(f, "{}", self.at(row, col))?;
            }

            if row + 1 < ROWS {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}
