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

/// The sentinel for an empty user cell, distinct from any letter.
pub const BLANK: char = ' ';

/// A single observed cell edit. Programmatic reveals and resets are
/// never recorded; the engine only feeds the log genuine keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserAction {
    pub row: usize,
    pub col: usize,
    pub previous: char,
    pub new: char,
}

/// Undo/redo history of user edits, independent of the solver's own
/// placement history.
#[derive(Default)]
pub struct EditLog {
    undo: Vec<UserAction>,
    redo: Vec<UserAction>,
}

impl EditLog {
    pub fn new() -> EditLog {
        EditLog {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Records a fresh edit. A no-op when nothing changed. Any fresh
    /// edit invalidates the redo history; the engine must not call
    /// this while replaying an undo or redo.
    pub fn record(
        &mut self,
        row: usize,
        col: usize,
        previous: char,
        new: char,
    ) {
        if previous == new {
            return;
        }

        self.undo.push(UserAction { row, col, previous, new });
        self.redo.clear();
    }

    /// Pops the most recent edit, moving it onto the redo stack. The
    /// caller must restore the returned action's cell to `previous`.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<UserAction> {
        let action = self.undo.pop()?;
        self.redo.push(action);
        Some(action)
    }

    /// The inverse of [`undo`](EditLog::undo): the caller must set
    /// the returned action's cell back to `new`.
    pub fn redo(&mut self) -> Option<UserAction> {
        let action = self.redo.pop()?;
        self.undo.push(action);
        Some(action)
    }

    /// Clears both stacks, for when a new puzzle is loaded or the
    /// board is wiped.
    pub fn reset(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
