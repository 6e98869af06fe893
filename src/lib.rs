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

//! Construction and validation engine for themed crossword puzzles
//! on a fixed 18×18 grid: a backtracking placement solver with its
//! constraint checker and heuristic scorer, a prefix-trie dictionary
//! for word and prefix validation, and an undo/redo log for user
//! edits during interactive solving.

pub mod constraint;
pub mod edit_log;
pub mod engine;
pub mod grid;
pub mod placement;
pub mod score;
pub mod solver;
pub mod trie;
