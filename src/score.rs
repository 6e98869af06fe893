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

const VOWELS: &str = "AEIOU";

/// Ranks a candidate placement for search ordering. Legality has
/// already been decided by [`super::constraint::can_place`]; the
/// score never gates it.
///
/// The weights: +10 per intersection with an existing letter, a
/// centrality bonus of `max(0, 20 - manhattan distance from the grid
/// centre)`, +2 per letter, +3 per vowel, and +5 when the candidate's
/// direction is the scarcer of across/down among the placed words.
pub fn placement_score(
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
    grid: &Grid,
    placed: &[Placement],
) -> i32 {
    let mut score = 0;

    let intersections = word
        .chars()
        .enumerate()
        .filter(|&(i, _)| {
            let (r, c) = direction.step(row, col, i);
            !grid.is_black(r, c)
        })
        .count();
    score += intersections as i32 * 10;

    let distance = row.abs_diff(ROWS / 2) + col.abs_diff(COLS / 2);
    score += std::cmp::max(0, 20 - distance as i32);

    score += word.chars().count() as i32 * 2;

    let vowels = word.chars().filter(|&ch| VOWELS.contains(ch)).count();
    score += vowels as i32 * 3;

    if !placed.is_empty() {
        let across = placed
            .iter()
            .filter(|p| p.direction() == Direction::Across)
            .count();
        let down = placed.len() - across;

        // Nudge the search towards an across/down balance. No bonus
        // on ties or on the first word.
        if (direction == Direction::Across && across < down)
            || (direction == Direction::Down && down < across)
        {
            score += 5;
        }
    }

    score
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::solver::apply_placement;

    #[test]
    fn centre_beats_corner() {
        let grid = Grid::new();

        let centre = placement_score(
            "QUEUE",
            ROWS / 2,
            COLS / 2,
            Direction::Across,
            &grid,
            &[],
        );
        let corner =
            placement_score("QUEUE", 0, 0, Direction::Across, &grid, &[]);

        assert!(centre > corner);

        // At the centre the full bonus applies: 20 centrality,
        // 5 letters * 2, 4 vowels * 3
        assert_eq!(centre, 20 + 10 + 12);
    }

    #[test]
    fn intersections_dominate() {
        let mut grid = Grid::new();
        let stack = Placement::new("STACK", 5, 5, Direction::Across);
        apply_placement(&mut grid, &stack);
        let placed = vec![stack];

        // TREE down through the T of STACK: one intersection
        let crossing =
            placement_score("TREE", 5, 6, Direction::Down, &grid, &placed);
        let detached =
            placement_score("TREE", 12, 12, Direction::Down, &grid, &placed);

        assert!(crossing > detached);
    }

    #[test]
    fn scarcer_direction_bonus() {
        let mut grid = Grid::new();
        let stack = Placement::new("STACK", 5, 5, Direction::Across);
        apply_placement(&mut grid, &stack);
        let placed = vec![stack];

        // One across word placed, none down: a down candidate earns
        // the balance bonus, an across one at the same start does
        // not. Far from STACK so neither direction intersects.
        let down =
            placement_score("TREE", 12, 12, Direction::Down, &grid, &placed);
        let across =
            placement_score("TREE", 12, 12, Direction::Across, &grid, &placed);

        assert_eq!(down - across, 5);
    }

    #[test]
    fn no_balance_bonus_on_first_word() {
        let grid = Grid::new();

        let across =
            placement_score("TREE", 5, 5, Direction::Across, &grid, &[]);
        let down = placement_score("TREE", 5, 5, Direction::Down, &grid, &[]);

        assert_eq!(across, down);
    }
}
