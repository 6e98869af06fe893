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

use super::edit_log::{EditLog, UserAction, BLANK};
use super::grid::{Grid, BLACK, COLS, ROWS};
use super::placement::{Direction, Placement};
use super::solver::{self, Mode};
use super::trie::Trie;

/// The placeholder written into a reconstructed user word for an
/// unfilled cell. The dictionary rejects it, so a word or prefix
/// with a gap never counts as valid.
const UNFILLED: char = '?';

/// What the presentation layer sees when it queries a solution cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Black,
    Letter(char),
}

impl Cell {
    pub fn is_black(self) -> bool {
        matches!(self, Cell::Black)
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Black => None,
            Cell::Letter(ch) => Some(ch),
        }
    }
}

/// Why a user edit was rejected. Rejection is a normal result; the
/// presentation layer translates raw key events into legal calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    OutOfBounds,
    BlackSquare,
    InvalidCharacter(char),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditError::OutOfBounds => write!(f, "cell is outside the grid"),
            EditError::BlackSquare => write!(f, "cell is a black square"),
            EditError::InvalidCharacter(ch) => {
                write!(f, "not a letter or blank: {:?}", ch)
            },
        }
    }
}

/// Feedback category for one word slot. `Correct` wins over `Valid`
/// which wins over `Invalid`; the categories are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStatus {
    Correct,
    Valid,
    Invalid,
}

#[derive(Debug)]
pub struct WordFeedback {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub entry: String,
    pub status: WordStatus,
}

#[derive(Debug)]
pub struct CheckReport {
    pub correct_words: usize,
    pub valid_words: usize,
    pub score: i32,
    pub feedback: Vec<WordFeedback>,
}

/// The answer to a hint request for one slot.
#[derive(Debug, PartialEq, Eq)]
pub enum Hint {
    /// Nothing entered yet; report how many letters the word has.
    Length(usize),
    /// The entered-so-far sequence and whether it is a prefix of a
    /// dictionary word. A gap before the last entered letter makes
    /// the prefix invalid.
    Prefix { entry: String, valid: bool },
}

/// The puzzle engine: owns the solution grid, the committed
/// placements, the user's entries and their undo/redo log. The
/// presentation layer reads state through queries and mutates it
/// only through commands; it never holds a reference to a cell.
pub struct Engine {
    dictionary: Trie,
    solution: Grid,
    entries: [char; ROWS * COLS],
    placed: Vec<Placement>,
    edits: EditLog,
}

impl Engine {
    pub fn new() -> Engine {
        Engine {
            dictionary: Trie::new(),
            solution: Grid::new(),
            entries: [BLANK; ROWS * COLS],
            placed: Vec::new(),
            edits: EditLog::new(),
        }
    }

    /// Adds a themed word to the dictionary used for validity checks
    /// and hints.
    pub fn add_word(&mut self, word: &str) {
        self.dictionary.insert(&word.to_uppercase());
    }

    /// Replaces the current puzzle with the given placements,
    /// applying them in order (later letters overwrite earlier ones
    /// at shared cells). All user entries and edit history are
    /// discarded. The placement words join the dictionary.
    pub fn load_puzzle(&mut self, placements: Vec<Placement>) {
        self.solution.clear();
        self.clear_entries();

        for placement in &placements {
            self.dictionary.insert(placement.word());
            solver::apply_placement(&mut self.solution, placement);
        }

        self.placed = placements;
    }

    /// Builds a puzzle from `words` with the backtracking solver,
    /// replacing any current puzzle. Returns false when no legal
    /// arrangement exists for the chosen ordering; the caller may
    /// retry with a different seed or word list.
    pub fn generate(&mut self, words: &[String], mode: Mode) -> bool {
        self.clear_entries();

        let words = words
            .iter()
            .map(|word| word.to_uppercase())
            .collect::<Vec<String>>();

        for word in &words {
            self.dictionary.insert(word);
        }

        solver::generate(&words, &mut self.solution, &mut self.placed, mode)
    }

    pub fn query_cell(&self, row: usize, col: usize) -> Cell {
        if row >= ROWS || col >= COLS {
            return Cell::Black;
        }

        match self.solution.at(row, col) {
            BLACK => Cell::Black,
            ch => Cell::Letter(ch),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placed
    }

    /// The placements running in `direction`, in clue-panel order:
    /// across by row then column, down by column then row.
    pub fn placements_sorted(&self, direction: Direction) -> Vec<&Placement> {
        let mut list = self
            .placed
            .iter()
            .filter(|p| p.direction() == direction)
            .collect::<Vec<&Placement>>();

        match direction {
            Direction::Across => list.sort_by_key(|p| (p.row(), p.col())),
            Direction::Down => list.sort_by_key(|p| (p.col(), p.row())),
        }

        list
    }

    /// Accepts one keystroke: a single A–Z letter or the blank
    /// sentinel, on a letter cell. Anything else is rejected. A
    /// change is recorded in the edit log, clearing the redo stack.
    pub fn submit_user_edit(
        &mut self,
        row: usize,
        col: usize,
        ch: char,
    ) -> Result<(), EditError> {
        if row >= ROWS || col >= COLS {
            return Err(EditError::OutOfBounds);
        }

        if !ch.is_ascii_uppercase() && ch != BLANK {
            return Err(EditError::InvalidCharacter(ch));
        }

        if self.solution.is_black(row, col) {
            return Err(EditError::BlackSquare);
        }

        let previous = self.entries[row * COLS + col];

        if previous != ch {
            self.edits.record(row, col, previous, ch);
            self.entries[row * COLS + col] = ch;
        }

        Ok(())
    }

    pub fn user_cell(&self, row: usize, col: usize) -> char {
        self.entries[row * COLS + col]
    }

    /// Reverts the most recent user edit. Replaying the edit is not
    /// itself recorded. Returns the undone action, or `None` when
    /// the history is empty.
    pub fn undo(&mut self) -> Option<UserAction> {
        let action = self.edits.undo()?;
        self.entries[action.row * COLS + action.col] = action.previous;
        Some(action)
    }

    pub fn redo(&mut self) -> Option<UserAction> {
        let action = self.edits.redo()?;
        self.entries[action.row * COLS + action.col] = action.new;
        Some(action)
    }

    /// Wipes the user's entries and the whole edit history. The
    /// solution and placements are untouched.
    pub fn reset_edits(&mut self) {
        self.clear_entries();
    }

    fn clear_entries(&mut self) {
        self.entries = [BLANK; ROWS * COLS];
        self.edits.reset();
    }

    fn user_word(&self, placement: &Placement) -> String {
        placement
            .cells()
            .map(|(row, col)| match self.entries[row * COLS + col] {
                BLANK => UNFILLED,
                ch => ch,
            })
            .collect()
    }

    /// Grades every slot against the user's entries. A slot is
    /// correct when it matches the solution letter-for-letter, and
    /// valid when the reconstructed entry is a dictionary word
    /// (correct entries are dictionary words too and count toward
    /// the valid tally). Aggregate score is `10*correct + 5*valid`.
    /// Returns `None` when no puzzle is loaded.
    pub fn check_all(&self) -> Option<CheckReport> {
        if self.placed.is_empty() {
            return None;
        }

        let mut correct_words = 0;
        let mut valid_words = 0;
        let mut feedback = Vec::with_capacity(self.placed.len());

        for placement in &self.placed {
            let entry = self.user_word(placement);
            let correct = entry == placement.word();
            let valid = self.dictionary.contains(&entry);

            if correct {
                correct_words += 1;
            }
            if valid {
                valid_words += 1;
            }

            let status = if correct {
                WordStatus::Correct
            } else if valid {
                WordStatus::Valid
            } else {
                WordStatus::Invalid
            };

            feedback.push(WordFeedback {
                row: placement.row(),
                col: placement.col(),
                direction: placement.direction(),
                entry,
                status,
            });
        }

        Some(CheckReport {
            correct_words,
            valid_words,
            score: correct_words as i32 * 10 + valid_words as i32 * 5,
            feedback,
        })
    }

    /// A hint for the slot at `index` into [`Engine::placements`].
    /// With no letters entered the hint is the
    /// word's length; otherwise it is the sequence entered so far
    /// (up to the last filled cell) and whether that sequence is a
    /// valid dictionary prefix. Unfilled cells inside the sequence
    /// appear as `'?'` and make the prefix invalid.
    pub fn hint(&self, index: usize) -> Option<Hint> {
        let placement = self.placed.get(index)?;

        let filled = placement
            .cells()
            .map(|(row, col)| self.entries[row * COLS + col])
            .collect::<Vec<char>>();

        match filled.iter().rposition(|&ch| ch != BLANK) {
            None => Some(Hint::Length(placement.len())),
            Some(last) => {
                let entry = filled[..=last]
                    .iter()
                    .map(|&ch| if ch == BLANK { UNFILLED } else { ch })
                    .collect::<String>();
                let valid = self.dictionary.starts_with(&entry);

                Some(Hint::Prefix { entry, valid })
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // STACK across at (5,5) crossed by TREE down through the T at
    // (5,6). Geometrically consistent, unlike nothing else about it.
    fn sample_engine() -> Engine {
        let mut engine = Engine::new();

        engine.load_puzzle(vec![
            Placement::new("STACK", 5, 5, Direction::Across),
            Placement::new("TREE", 5, 6, Direction::Down),
        ]);

        engine
    }

    fn enter(engine: &mut Engine, placement_index: usize, word: &str) {
        let cells = engine.placements()[placement_index]
            .cells()
            .collect::<Vec<(usize, usize)>>();

        for ((row, col), ch) in cells.into_iter().zip(word.chars()) {
            engine.submit_user_edit(row, col, ch).unwrap();
        }
    }

    #[test]
    fn load_and_query() {
        let engine = sample_engine();

        assert_eq!(engine.query_cell(5, 5), Cell::Letter('S'));
        assert_eq!(engine.query_cell(5, 6), Cell::Letter('T'));
        assert_eq!(engine.query_cell(6, 6), Cell::Letter('R'));
        assert_eq!(engine.query_cell(5, 9), Cell::Letter('K'));
        assert_eq!(engine.query_cell(0, 0), Cell::Black);
        assert_eq!(engine.query_cell(ROWS, 0), Cell::Black);

        assert!(engine.query_cell(4, 4).is_black());
        assert_eq!(engine.query_cell(5, 5).letter(), Some('S'));
    }

    #[test]
    fn check_before_any_input() {
        let engine = sample_engine();
        let report = engine.check_all().unwrap();

        assert_eq!(report.correct_words, 0);
        assert_eq!(report.valid_words, 0);
        assert_eq!(report.score, 0);
        assert!(report
            .feedback
            .iter()
            .all(|f| f.status == WordStatus::Invalid));
    }

    #[test]
    fn check_scores_correct_and_valid_words() {
        let mut engine = sample_engine();
        engine.add_word("TRAM");

        // STACK entered correctly; TREE's slot filled with TRAM, a
        // dictionary word that is not the solution. The two share
        // the T at (5,6).
        enter(&mut engine, 0, "STACK");
        engine.submit_user_edit(6, 6, 'R').unwrap();
        engine.submit_user_edit(7, 6, 'A').unwrap();
        engine.submit_user_edit(8, 6, 'M').unwrap();

        let report = engine.check_all().unwrap();

        assert_eq!(report.correct_words, 1);
        // STACK counts as valid too: a correct entry is a word
        assert_eq!(report.valid_words, 2);
        assert_eq!(report.score, 10 + 2 * 5);

        assert_eq!(report.feedback[0].status, WordStatus::Correct);
        assert_eq!(report.feedback[1].status, WordStatus::Valid);
        assert_eq!(report.feedback[1].entry, "TRAM");
    }

    #[test]
    fn check_with_no_puzzle() {
        let engine = Engine::new();
        assert!(engine.check_all().is_none());
    }

    #[test]
    fn edit_validation() {
        let mut engine = sample_engine();

        assert_eq!(
            engine.submit_user_edit(ROWS, 0, 'A'),
            Err(EditError::OutOfBounds),
        );
        assert_eq!(
            engine.submit_user_edit(0, 0, 'A'),
            Err(EditError::BlackSquare),
        );
        assert_eq!(
            engine.submit_user_edit(5, 5, 'a'),
            Err(EditError::InvalidCharacter('a')),
        );
        assert_eq!(
            engine.submit_user_edit(5, 5, '3'),
            Err(EditError::InvalidCharacter('3')),
        );

        assert!(engine.submit_user_edit(5, 5, 'S').is_ok());
        assert_eq!(engine.user_cell(5, 5), 'S');

        // Blank erases
        assert!(engine.submit_user_edit(5, 5, ' ').is_ok());
        assert_eq!(engine.user_cell(5, 5), ' ');
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut engine = sample_engine();

        engine.submit_user_edit(5, 5, 'S').unwrap();
        engine.submit_user_edit(5, 5, 'Z').unwrap();

        let before = engine.user_cell(5, 5);
        engine.undo().unwrap();
        assert_eq!(engine.user_cell(5, 5), 'S');
        engine.redo().unwrap();
        assert_eq!(engine.user_cell(5, 5), before);

        // A fresh edit after an undo clears the redo history
        engine.undo().unwrap();
        engine.submit_user_edit(5, 5, 'Q').unwrap();
        assert!(engine.redo().is_none());
        assert_eq!(engine.user_cell(5, 5), 'Q');
    }

    #[test]
    fn reset_edits_wipes_entries_and_history() {
        let mut engine = sample_engine();

        engine.submit_user_edit(5, 5, 'S').unwrap();
        engine.reset_edits();

        assert_eq!(engine.user_cell(5, 5), BLANK);
        assert!(engine.undo().is_none());
        assert!(engine.redo().is_none());

        // The puzzle itself survives
        assert_eq!(engine.query_cell(5, 5), Cell::Letter('S'));
    }

    #[test]
    fn hint_reports_length_then_prefix() {
        let mut engine = sample_engine();

        assert_eq!(engine.hint(0), Some(Hint::Length(5)));

        engine.submit_user_edit(5, 5, 'S').unwrap();
        engine.submit_user_edit(5, 6, 'T').unwrap();

        assert_eq!(
            engine.hint(0),
            Some(Hint::Prefix { entry: "ST".to_string(), valid: true }),
        );

        // A wrong prefix is flagged
        engine.submit_user_edit(5, 6, 'Z').unwrap();
        assert_eq!(
            engine.hint(0),
            Some(Hint::Prefix { entry: "SZ".to_string(), valid: false }),
        );

        assert!(engine.hint(99).is_none());
    }

    #[test]
    fn hint_gap_invalidates_prefix() {
        let mut engine = sample_engine();

        // S _ A entered for STACK: the gap is part of the sequence
        // and the dictionary rejects it
        engine.submit_user_edit(5, 5, 'S').unwrap();
        engine.submit_user_edit(5, 7, 'A').unwrap();

        assert_eq!(
            engine.hint(0),
            Some(Hint::Prefix { entry: "S?A".to_string(), valid: false }),
        );
    }

    #[test]
    fn placements_sorted_for_clue_panel() {
        let mut engine = Engine::new();

        engine.load_puzzle(vec![
            Placement::new("ARRAY", 7, 5, Direction::Across),
            Placement::new("STACK", 5, 5, Direction::Across),
            Placement::new("HEAP", 5, 7, Direction::Down),
            Placement::new("TREE", 5, 6, Direction::Down),
        ]);

        let across = engine.placements_sorted(Direction::Across);
        assert_eq!(
            across.iter().map(|p| p.word()).collect::<Vec<_>>(),
            vec!["STACK", "ARRAY"],
        );

        let down = engine.placements_sorted(Direction::Down);
        assert_eq!(
            down.iter().map(|p| p.word()).collect::<Vec<_>>(),
            vec!["TREE", "HEAP"],
        );
    }

    #[test]
    fn generate_replaces_loaded_puzzle() {
        let mut engine = sample_engine();
        engine.submit_user_edit(5, 5, 'S').unwrap();

        let words = ["STACK", "ARRAY", "TREE", "HEAP"]
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<String>>();

        assert!(engine.generate(&words, Mode::Deterministic));
        assert_eq!(engine.placements().len(), 4);

        // Old entries and history are gone
        assert!(engine.undo().is_none());
        let blank_everywhere = (0..ROWS).all(|row| {
            (0..COLS).all(|col| engine.user_cell(row, col) == BLANK)
        });
        assert!(blank_everywhere);
    }

    #[test]
    fn generate_lowercases_are_accepted() {
        let mut engine = Engine::new();

        let words = ["stack", "tree"]
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<String>>();

        assert!(engine.generate(&words, Mode::Deterministic));
        assert!(engine
            .placements()
            .iter()
            .all(|p| p.word().chars().all(|ch| ch.is_ascii_uppercase())));
    }
}
