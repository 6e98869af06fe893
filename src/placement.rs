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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The cell `i` steps along this axis from `(row, col)`.
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Across => (row, col + i),
            Direction::Down => (row + i, col),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A word bound to a fixed start cell and direction. Immutable once
/// constructed; the grid coordinates of its letters are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    word: String,
    row: usize,
    col: usize,
    direction: Direction,
}

impl Placement {
    pub fn new(
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Placement {
        Placement {
            word: word.to_string(),
            row,
            col,
            direction,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The grid cell holding the `i`th letter.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        self.direction.step(self.row, self.col, i)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(|i| self.cell(i))
    }

    /// The letters of the word paired with the cells they occupy.
    pub fn letters(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.word.chars().enumerate().map(|(i, ch)| {
            let (row, col) = self.cell(i);
            (row, col, ch)
        })
    }

    /// True iff `(row, col)` lies on this word's span.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        match self.direction {
            Direction::Across => {
                row == self.row
                    && col >= self.col
                    && col < self.col + self.len()
            },
            Direction::Down => {
                col == self.col
                    && row >= self.row
                    && row < self.row + self.len()
            },
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{},{}] {}",
            self.word,
            self.row,
            self.col,
            self.direction,
        )
    }
}
