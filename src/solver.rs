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

use std::cmp::Reverse;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::constraint::can_place;
use super::grid::{Grid, BLACK, COLS, ROWS};
use super::placement::{Direction, Placement};
use super::score::placement_score;

/// How the generator orders its search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Longest word first, best-scoring candidate first. Two runs on
    /// the same word list build the same puzzle.
    Deterministic,
    /// Word order and candidate order shuffled with the given seed.
    /// The same seed reproduces the same puzzle; a fresh seed is the
    /// retry mechanism when the search fails.
    Random(u64),
}

struct Candidate {
    row: usize,
    col: usize,
    direction: Direction,
    score: i32,
}

/// Searches for a complete legal arrangement of `words`, leaving it
/// in `grid` and `placed` on success. On failure both are left
/// cleared; there is no partial result. The search is exhaustive for
/// the chosen word ordering, so the worst case is exponential in the
/// word count and callers should keep word lists small.
pub fn generate(
    words: &[String],
    grid: &mut Grid,
    placed: &mut Vec<Placement>,
    mode: Mode,
) -> bool {
    grid.clear();
    placed.clear();

    log::debug!("generating from {} words in {:?} mode", words.len(), mode);

    let success = match mode {
        Mode::Deterministic => {
            let ordered = order_longest_first(words);
            backtrack(&ordered, 0, grid, placed)
        },
        Mode::Random(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            let ordered = order_shuffled(words, &mut rng);
            backtrack_random(&ordered, 0, grid, placed, &mut rng)
        },
    };

    if success {
        log::debug!("placed all {} words", placed.len());
    } else {
        log::debug!("search exhausted with no arrangement");
        grid.clear();
        placed.clear();
    }

    success
}

// Descending length; the sort is stable so equal-length words keep
// their original order.
fn order_longest_first(words: &[String]) -> Vec<String> {
    let mut ordered = words.to_vec();
    ordered.sort_by_key(|word| Reverse(word.chars().count()));
    ordered
}

// Shuffle first, then stable-sort by descending length. Each
// equal-length bucket is left in seed-reproducible shuffled order,
// without a comparator that invokes the generator mid-sort.
fn order_shuffled(words: &[String], rng: &mut StdRng) -> Vec<String> {
    let mut ordered = words.to_vec();
    ordered.shuffle(rng);
    ordered.sort_by_key(|word| Reverse(word.chars().count()));
    ordered
}

// Every (row, col, direction) triple at which the word may legally
// go, in row-major enumeration order.
fn valid_placements(
    word: &str,
    grid: &Grid,
    placed: &[Placement],
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for row in 0..ROWS {
        for col in 0..COLS {
            for direction in [Direction::Across, Direction::Down] {
                if can_place(word, row, col, direction, grid, placed) {
                    candidates.push(Candidate {
                        row,
                        col,
                        direction,
                        score: placement_score(
                            word, row, col, direction, grid, placed,
                        ),
                    });
                }
            }
        }
    }

    candidates
}

/// Writes the placement's letters into the grid.
pub fn apply_placement(grid: &mut Grid, placement: &Placement) {
    for (row, col, ch) in placement.letters() {
        grid.set(row, col, ch);
    }
}

/// Undoes [`apply_placement`]. A cell reverts to black only when no
/// placement in `placed` still covers it, so intersections survive
/// the removal of one of their words.
pub fn remove_placement(
    grid: &mut Grid,
    placement: &Placement,
    placed: &[Placement],
) {
    for (row, col) in placement.cells() {
        if !placed.iter().any(|other| other.covers(row, col)) {
            grid.set(row, col, BLACK);
        }
    }
}

fn backtrack(
    words: &[String],
    idx: usize,
    grid: &mut Grid,
    placed: &mut Vec<Placement>,
) -> bool {
    if idx >= words.len() {
        return true;
    }

    let word = &words[idx];

    let mut candidates = valid_placements(word, grid, placed);
    // Stable, so equally scored candidates stay in enumeration order
    candidates.sort_by_key(|candidate| Reverse(candidate.score));

    for candidate in candidates {
        let placement =
            Placement::new(word, candidate.row, candidate.col, candidate.direction);

        apply_placement(grid, &placement);
        placed.push(placement);

        if backtrack(words, idx + 1, grid, placed) {
            return true;
        }

        if let Some(placement) = placed.pop() {
            remove_placement(grid, &placement, placed);
        }
    }

    false
}

fn backtrack_random(
    words: &[String],
    idx: usize,
    grid: &mut Grid,
    placed: &mut Vec<Placement>,
    rng: &mut StdRng,
) -> bool {
    if idx >= words.len() {
        return true;
    }

    let word = &words[idx];

    let mut candidates = valid_placements(word, grid, placed);

    if candidates.is_empty() {
        return false;
    }

    candidates.shuffle(rng);

    for candidate in candidates {
        let placement =
            Placement::new(word, candidate.row, candidate.col, candidate.direction);

        apply_placement(grid, &placement);
        placed.push(placement);

        if backtrack_random(words, idx + 1, grid, placed, rng) {
            return true;
        }

        if let Some(placement) = placed.pop() {
            remove_placement(grid, &placement, placed);
        }
    }

    false
}
