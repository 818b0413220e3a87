use dedoku_core::{Board, Cell, DigitSet, Puzzle};

use crate::{
    EngineError, SolveError,
    rule::{self, BoxedRule},
};

/// Classification of a full solve of a given puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell was reduced to a single digit and the result validated.
    Solved(Puzzle),
    /// A fixed point was reached without contradiction but with cells
    /// still undecided.
    ///
    /// In principle this is reachable for puzzles with several solutions
    /// or too few givens, though the trial step's exhaustiveness makes it
    /// rare in practice. It is kept as a defined outcome rather than
    /// asserted unreachable.
    Stuck(Puzzle),
}

/// The solving engine: a first-pass rule set plus trial-and-backtrack.
///
/// The engine mirrors a human deductive strategy. Eliminations and forced
/// singles are driven to a fixed point; only when they stall does the
/// solver start disproving candidates by trial. Each trial clones the
/// board, forces one candidate, and recursively solves the clone, so no
/// state is shared between a board and its trials.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Board, Puzzle};
/// use dedoku_solver::Solver;
///
/// let solver = Solver::new();
/// let mut board = Board::from_puzzle(&Puzzle::new());
/// solver.solve(&mut board)?;
/// assert!(board.is_solved());
/// # Ok::<(), dedoku_solver::SolveError>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    rules: Vec<BoxedRule>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with the standard first-pass rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: rule::first_pass_rules(),
        }
    }

    /// Solves a given puzzle end to end.
    ///
    /// Seeds a fresh board, validates the givens, solves, validates the
    /// result, and classifies it as [`Outcome::Solved`] or
    /// [`Outcome::Stuck`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invalid`] if the givens (or, in the presence
    /// of an engine bug, the result) repeat a digit within a unit, and
    /// [`EngineError::Solve`] if solving proves the puzzle unsatisfiable.
    pub fn solve_puzzle(&self, puzzle: &Puzzle) -> Result<Outcome, EngineError> {
        let mut board = Board::from_puzzle(puzzle);
        board.validate()?;
        self.solve(&mut board)?;
        board.validate()?;

        let result = board.to_puzzle();
        if board.is_solved() {
            Ok(Outcome::Solved(result))
        } else {
            Ok(Outcome::Stuck(result))
        }
    }

    /// Reduces the board in place until it is solved or no rule makes
    /// progress.
    ///
    /// Each iteration runs the first-pass rules to a fixed point, then, if
    /// the board is still unsolved, one trial-and-backtrack step. The loop
    /// stops as soon as the board is solved, or when neither phase changed
    /// anything, leaving the board in its most-reduced state.
    ///
    /// # Errors
    ///
    /// Propagates any rule failure unmodified; see [`SolveError`].
    pub fn solve(&self, board: &mut Board) -> Result<(), SolveError> {
        loop {
            let mut progressed = self.run_rules(board)?;
            if !board.is_solved() && self.trial_step(board)? {
                progressed = true;
            }
            if board.is_solved() || !progressed {
                return Ok(());
            }
        }
    }

    /// Applies every first-pass rule in order, repeating while any pass
    /// changes the board. Returns whether any pass changed anything.
    ///
    /// Termination is guaranteed because rules only remove candidates or
    /// fix singletons, so the total candidate count shrinks monotonically.
    fn run_rules(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut any = false;
        loop {
            board.reset_changed();
            for rule in &self.rules {
                rule.apply(board)?;
            }
            if !board.changed() {
                return Ok(any);
            }
            any = true;
        }
    }

    /// One pass of trial-and-backtrack over the unsolved cells.
    ///
    /// For each remaining candidate (cells row-major, digits ascending),
    /// the candidate is forced on a clone and the clone solved
    /// recursively. A failed recursion disproves the candidate and removes
    /// it from this board; a fully solved clone is adopted wholesale,
    /// ending the search. A clone that merely stalls proves nothing.
    ///
    /// Returns whether this board changed (by candidate removal or
    /// adoption of a solution).
    fn trial_step(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut progressed = false;
        for cell in Cell::all() {
            if board.is_cell_solved(cell) {
                continue;
            }
            // Snapshot: removals below must not affect this iteration.
            let candidates = board.candidates(cell);
            for digit in candidates {
                let mut trial = board.clone();
                trial.set_value(cell, digit)?;
                match self.solve(&mut trial) {
                    Err(_) => {
                        board.remove_candidates(cell, DigitSet::from_elem(digit));
                        progressed = true;
                        if board.candidates(cell).is_empty() {
                            return Err(SolveError::UnsatisfiableCell { cell });
                        }
                    }
                    Ok(()) if trial.is_solved() => {
                        *board = trial;
                        return Ok(true);
                    }
                    Ok(()) => {}
                }
            }
        }
        Ok(progressed)
    }
}
