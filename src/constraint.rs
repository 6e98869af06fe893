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

use super::grid::{Grid, COLS, ROWS};
use super::placement::{Direction, Placement};

/// Decides whether `word` may legally be committed at
/// `(row, col, direction)` against the current grid.
///
/// The rules, checked in order with a short-circuit on the first
/// violation:
///
/// 1. the span fits within the grid bounds;
/// 2. the cells flanking the span along its axis are black or
///    off-grid, so words never abut end-to-end;
/// 3. each cell on the span either already holds the same letter
///    (an intersection) or is black with both perpendicular
///    neighbours black, so a fresh letter never touches an
///    unrelated word sideways;
/// 4. at least one intersection exists, unless nothing has been
///    placed yet.
///
/// Returning false is a normal negative result, not an error.
pub fn can_place(
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
    grid: &Grid,
    placed: &[Placement],
) -> bool {
    let len = word.chars().count();

    if len == 0 {
        return false;
    }

    match direction {
        Direction::Across => {
            if col + len > COLS {
                return false;
            }
            if col > 0 && !grid.is_black(row, col - 1) {
                return false;
            }
            if col + len < COLS && !grid.is_black(row, col + len) {
                return false;
            }
        },
        Direction::Down => {
            if row + len > ROWS {
                return false;
            }
            if row > 0 && !grid.is_black(row - 1, col) {
                return false;
            }
            if row + len < ROWS && !grid.is_black(row + len, col) {
                return false;
            }
        },
    }

    let mut intersections = 0;

    for (i, ch) in word.chars().enumerate() {
        let (r, c) = direction.step(row, col, i);

        if grid.is_black(r, c) {
            let perpendicular_clear = match direction {
                Direction::Across => {
                    (r == 0 || grid.is_black(r - 1, c))
                        && (r == ROWS - 1 || grid.is_black(r + 1, c))
                },
                Direction::Down => {
                    (c == 0 || grid.is_black(r, c - 1))
                        && (c == COLS - 1 || grid.is_black(r, c + 1))
                },
            };

            if !perpendicular_clear {
                return false;
            }
        } else {
            if grid.at(r, c) != ch {
                return false;
            }
            intersections += 1;
        }
    }

    placed.is_empty() || intersections > 0
}
