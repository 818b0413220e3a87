//! Deductive Sudoku solving engine.
//!
//! The engine reduces a [`Board`](dedoku_core::Board) of per-cell candidate
//! sets in three phases:
//!
//! 1. A first-pass rule set ([`rule::first_pass_rules`]) of eliminators and
//!    single-candidate seekers, driven to a fixed point.
//! 2. A trial-and-backtrack step that disproves candidates by cloning the
//!    board and solving the clone recursively.
//! 3. Repetition of both until the board is solved or neither phase makes
//!    progress.
//!
//! [`Solver::solve_puzzle`] wraps the whole pipeline: it seeds a board from
//! a [`Puzzle`](dedoku_core::Puzzle), validates it, solves, validates the
//! result, and classifies the [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use dedoku_solver::{Outcome, Solver};
//!
//! let puzzle = "
//!     _3_ 26_ 1__
//!     _6_ 8__ 324
//!     ___ __1 ___
//!     __1 _8_ _92
//!     ___ ___ ___
//!     49_ _2_ 5__
//!     ___ 6__ ___
//!     859 __2 _6_
//!     __7 _53 _8_
//! "
//! .parse()?;
//!
//! let solver = Solver::new();
//! match solver.solve_puzzle(&puzzle)? {
//!     Outcome::Solved(result) => println!("{result}"),
//!     Outcome::Stuck(partial) => println!("stuck at:\n{partial}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, solver::*};

mod error;
pub mod rule;
mod solver;

#[cfg(test)]
mod testing;
