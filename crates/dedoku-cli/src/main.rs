//! Command-line Sudoku solver.
//!
//! Reads a puzzle from a file, standard input, or a built-in preset, solves
//! it, and prints the result grid followed by a one-line verdict.
//!
//! # Usage
//!
//! ```sh
//! dedoku puzzle.txt
//! cat puzzle.txt | dedoku
//! dedoku --preset diabolical
//! ```
//!
//! Puzzle text uses `1`-`9` for givens and `.`, `_`, or `0` for blanks;
//! whitespace is ignored. Set `RUST_LOG=debug` for diagnostics.

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use dedoku_core::Puzzle;
use dedoku_solver::{Outcome, Solver};

const DIABOLICAL: &str = "
    _3_ 26_ 1__
    _6_ 8__ 324
    ___ __1 ___
    __1 _8_ _92
    ___ ___ ___
    49_ _2_ 5__
    ___ 6__ ___
    859 __2 _6_
    __7 _53 _8_
";

const HARDEST: &str = "
    8__ ___ ___
    __3 6__ ___
    _7_ _9_ 2__
    _5_ __7 ___
    ___ _45 7__
    ___ 1__ _3_
    __8 5__ _1_
    __1 ___ _68
    _9_ ___ 4__
";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// A difficult puzzle solvable by deduction alone.
    Diabolical,
    /// A puzzle that forces the trial-and-backtrack step.
    Hardest,
}

impl Preset {
    fn text(self) -> &'static str {
        match self {
            Self::Diabolical => DIABOLICAL,
            Self::Hardest => HARDEST,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve; reads standard input when omitted.
    #[arg(value_name = "FILE", conflicts_with = "preset")]
    file: Option<PathBuf>,

    /// Solve a built-in puzzle instead of reading one.
    #[arg(long, value_name = "NAME")]
    preset: Option<Preset>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let text = match read_puzzle_text(&args) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read puzzle: {err}");
            return ExitCode::FAILURE;
        }
    };

    let puzzle: Puzzle = match text.parse() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("failed to parse puzzle: {err}");
            return ExitCode::FAILURE;
        }
    };

    match Solver::new().solve_puzzle(&puzzle) {
        Ok(Outcome::Solved(solution)) => {
            print!("{solution}");
            println!("Puzzle successfully solved");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Stuck(partial)) => {
            print!("{partial}");
            println!("Puzzle not solved");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("solving failed: {err}");
            println!(
                "There was an error during solving. This could be due to an entry error, \
                 or, well, a bug. But be a sport and check what you entered."
            );
            ExitCode::FAILURE
        }
    }
}

fn read_puzzle_text(args: &Args) -> io::Result<String> {
    if let Some(preset) = args.preset {
        return Ok(preset.text().to_owned());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse() {
        for preset in [Preset::Diabolical, Preset::Hardest] {
            let puzzle: Result<Puzzle, _> = preset.text().parse();
            assert!(puzzle.is_ok());
        }
    }

    #[test]
    fn test_args_parse() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
