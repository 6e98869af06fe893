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

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;

use crossgen::engine::{Cell, Engine};
use crossgen::grid::{COLS, ROWS};
use crossgen::placement::Direction;
use crossgen::solver::Mode;

/// Generate a themed crossword puzzle from a word list
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON word list: an array of {"word": ..., "clue": ...}
    words: PathBuf,

    /// Seed for the randomised generator; omit for the
    /// deterministic one
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ThemeEntry {
    word: String,
    #[serde(default)]
    clue: String,
}

fn load_theme(path: &Path) -> Result<Vec<ThemeEntry>, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    serde_json::from_str(&data)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn print_grid(engine: &Engine) {
    for row in 0..ROWS {
        let line = (0..COLS)
            .map(|col| match engine.query_cell(row, col) {
                Cell::Black => '·',
                Cell::Letter(ch) => ch,
            })
            .collect::<String>();

        println!("{}", line);
    }
}

fn print_clues(engine: &Engine, clues: &HashMap<String, String>) {
    for (heading, direction) in
        [("ACROSS", Direction::Across), ("DOWN", Direction::Down)]
    {
        let placements = engine.placements_sorted(direction);

        if placements.is_empty() {
            continue;
        }

        println!("\n{}:", heading);

        for (num, placement) in placements.iter().enumerate() {
            let clue = clues
                .get(placement.word())
                .map(String::as_str)
                .unwrap_or(placement.word());

            println!(
                "{}. [{},{}] {}",
                num + 1,
                placement.row(),
                placement.col(),
                clue,
            );
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let theme = match load_theme(&cli.words) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut engine = Engine::new();
    let mut clues = HashMap::new();
    let mut words = Vec::new();

    for entry in theme {
        let word = entry.word.to_uppercase();

        engine.add_word(&word);

        if !entry.clue.is_empty() {
            clues.insert(word.clone(), entry.clue);
        }

        words.push(word);
    }

    let mode = match cli.seed {
        Some(seed) => Mode::Random(seed),
        None => Mode::Deterministic,
    };

    if !engine.generate(&words, mode) {
        eprintln!(
            "no legal arrangement found for these {} words{}",
            words.len(),
            match mode {
                Mode::Random(_) => "; try another seed",
                Mode::Deterministic => "",
            },
        );
        return ExitCode::FAILURE;
    }

    print_grid(&engine);
    print_clues(&engine, &clues);

    ExitCode::SUCCESS
}
