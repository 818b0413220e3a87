//! Core data structures for the dedoku solving engine.
//!
//! This crate provides the board model shared by the solver and its front
//! ends:
//!
//! - [`Digit`]: a validated sudoku digit 1-9
//! - [`DigitSet`]: the candidate set of a single cell, backed by a 9-bit mask
//! - [`Cell`]: a (row, column) coordinate on the 9x9 board
//! - [`Unit`] / [`UnitKind`]: rows, columns, and 3x3 boxes
//! - [`Puzzle`]: the given puzzle, a 9x9 grid of optional digits
//! - [`Board`]: per-cell candidate sets with a change flag and validators
//!
//! # Examples
//!
//! ```
//! use dedoku_core::{Board, Cell, Digit, Puzzle};
//!
//! let puzzle: Puzzle = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let board = Board::from_puzzle(&puzzle);
//! assert_eq!(board.solved_value(Cell::new(0, 0)), Digit::new(5));
//! assert_eq!(board.candidates(Cell::new(0, 2)).len(), 9);
//! # Ok::<(), dedoku_core::ParsePuzzleError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod puzzle;
pub mod unit;

pub use self::{
    board::{Board, DuplicateValue, InvalidAssignment},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    puzzle::{ParsePuzzleError, Puzzle},
    unit::{Unit, UnitKind},
};
