use dedoku_core::{Cell, Digit, DuplicateValue, InvalidAssignment, Unit};
use derive_more::{Display, Error, From};

/// A failure raised during rule application.
///
/// The unsatisfiable variants are the trial search's working material: a
/// nested trial that fails with any of these proves the tried candidate
/// impossible. Only when disproving a candidate empties a cell does the
/// failure escalate to the caller as [`UnsatisfiableCell`].
///
/// [`UnsatisfiableCell`]: SolveError::UnsatisfiableCell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// A rule forced a cell to an already-eliminated digit. Outside the
    /// trial mechanism this is a defect, not a puzzle property.
    #[display("{_0}")]
    #[from]
    InvalidAssignment(InvalidAssignment),
    /// No cell in the unit can take the digit.
    #[display("no cell in {unit} can take digit {digit}")]
    UnsatisfiableUnit {
        /// The unit with no remaining home for the digit.
        unit: Unit,
        /// The homeless digit.
        digit: Digit,
    },
    /// Every candidate at the cell has been disproved.
    #[display("no candidates remain at {cell}")]
    UnsatisfiableCell {
        /// The emptied cell.
        cell: Cell,
    },
}

/// A failure from a full [`solve_puzzle`](crate::Solver::solve_puzzle)
/// invocation.
///
/// Callers are expected to log the underlying cause and show a generic
/// failure message; the distinction between variants matters for control
/// flow and diagnosis, not for end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The given puzzle (or, post-solve, the engine's own output) repeats
    /// a digit within a unit.
    #[display("{_0}")]
    Invalid(DuplicateValue),
    /// Solving proved the puzzle unsatisfiable or hit a logic fault.
    #[display("{_0}")]
    Solve(SolveError),
}
