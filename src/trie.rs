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

const ALPHABET_SIZE: usize = 26;

fn letter_index(ch: char) -> Option<usize> {
    ch.is_ascii_uppercase().then(|| ch as usize - 'A' as usize)
}

struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    is_terminal: bool,
}

const NO_CHILD: Option<Box<Node>> = None;

impl Node {
    fn new() -> Node {
        Node {
            children: [NO_CHILD; ALPHABET_SIZE],
            is_terminal: false,
        }
    }
}

/// Prefix tree over uppercase A–Z words. Built once when the themed
/// word list is loaded and read-only afterwards.
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Trie {
        Trie { root: Node::new() }
    }

    /// Adds the A–Z letters of `word` as a path from the root. Other
    /// characters are skipped rather than rejected so that raw word
    /// lists can be inserted without pre-filtering.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        for ch in word.chars() {
            let Some(index) = letter_index(ch)
            else {
                continue;
            };

            node = node.children[index]
                .get_or_insert_with(|| Box::new(Node::new()));
        }

        node.is_terminal = true;
    }

    // Follows the letter path for `word`, failing on the first
    // character outside A–Z. The blank-cell placeholder therefore
    // makes any query return false.
    fn walk(&self, word: &str) -> Option<&Node> {
        let mut node = &self.root;

        for ch in word.chars() {
            let index = letter_index(ch)?;
            node = node.children[index].as_deref()?;
        }

        Some(node)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).map(|node| node.is_terminal).unwrap_or(false)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}
