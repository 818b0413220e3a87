//! The given puzzle: a 9x9 grid of optional digits.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Cell, Digit};

/// Error returned when parsing a [`Puzzle`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParsePuzzleError {
    /// The text contains a character that is neither a digit, a blank
    /// marker, nor whitespace.
    #[display("unexpected character {character:?} in puzzle text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("puzzle text has {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9x9 grid of given digits, the external input to the solver.
///
/// Each cell holds either a given digit or a blank. The textual form
/// accepts `1`-`9` for givens and `.`, `_`, or `0` for blanks; whitespace
/// is ignored, so grids can be laid out in rows and 3-cell groups for
/// readability.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Cell, Digit, Puzzle};
///
/// let puzzle: Puzzle = "
///     _3_ 26_ 1__
///     _6_ 8__ 324
///     ___ __1 ___
///     __1 _8_ _92
///     ___ ___ ___
///     49_ _2_ 5__
///     ___ 6__ ___
///     859 __2 _6_
///     __7 _53 _8_
/// "
/// .parse()?;
///
/// assert_eq!(puzzle.get(Cell::new(0, 1)), Digit::new(3));
/// assert_eq!(puzzle.get(Cell::new(0, 0)), None);
/// # Ok::<(), dedoku_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: [Option<Digit>; 81],
}

impl Puzzle {
    /// Creates an empty puzzle with no givens.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the given digit at `cell`, if any.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Sets or clears the given digit at `cell`.
    pub const fn set(&mut self, cell: Cell, digit: Option<Digit>) {
        self.cells[cell.index()] = digit;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut puzzle = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => character
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::new),
                _ => return Err(ParsePuzzleError::UnexpectedCharacter { character }),
            };
            if count < 81 {
                #[expect(clippy::cast_possible_truncation)]
                let cell = Cell::new((count / 9) as u8, (count % 9) as u8);
                puzzle.set(cell, digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParsePuzzleError::WrongCellCount { count });
        }
        Ok(puzzle)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Cell::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
