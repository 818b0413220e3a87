//! Fluent test harness for solving rules.

use dedoku_core::{Board, Cell, Digit, Puzzle};

use crate::{SolveError, rule::Rule};

/// Drives a rule against a board and checks its effects against the
/// pre-application state.
///
/// The tester keeps the board as it was before any rule ran, so
/// assertions can distinguish "removed by the rule" from "never a
/// candidate".
pub(crate) struct RuleTester {
    initial: Board,
    current: Board,
}

impl RuleTester {
    fn new(board: Board) -> Self {
        Self {
            initial: board.clone(),
            current: board,
        }
    }

    /// Starts from a board where every cell still has all nine candidates.
    pub(crate) fn empty() -> Self {
        Self::new(Board::from_puzzle(&Puzzle::new()))
    }

    /// Starts from a board seeded with the givens in `text`.
    #[track_caller]
    pub(crate) fn from_str(text: &str) -> Self {
        let puzzle: Puzzle = match text.parse() {
            Ok(puzzle) => puzzle,
            Err(err) => panic!("invalid puzzle text: {err}"),
        };
        Self::new(Board::from_puzzle(&puzzle))
    }

    /// Adjusts the starting board before the rule under test runs.
    ///
    /// The adjusted board becomes the new baseline for assertions, with
    /// its change flag lowered.
    pub(crate) fn prepare(mut self, setup: impl FnOnce(&mut Board)) -> Self {
        setup(&mut self.current);
        self.current.reset_changed();
        self.initial = self.current.clone();
        self
    }

    /// Applies the rule once, failing the test on error.
    #[track_caller]
    pub(crate) fn apply_once(mut self, rule: &impl Rule) -> Self {
        if let Err(err) = rule.apply(&mut self.current) {
            panic!("{} failed: {err}", rule.name());
        }
        self
    }

    /// Applies the rule repeatedly until a pass changes nothing.
    #[track_caller]
    pub(crate) fn apply_until_stuck(mut self, rule: &impl Rule) -> Self {
        loop {
            self.current.reset_changed();
            if let Err(err) = rule.apply(&mut self.current) {
                panic!("{} failed: {err}", rule.name());
            }
            if !self.current.changed() {
                return self;
            }
        }
    }

    /// Applies the rule once and reports whether it changed the board.
    #[track_caller]
    pub(crate) fn apply_and_check(mut self, rule: &impl Rule) -> bool {
        self.current.reset_changed();
        if let Err(err) = rule.apply(&mut self.current) {
            panic!("{} failed: {err}", rule.name());
        }
        self.current.changed()
    }

    /// Applies the rule once, expecting it to fail, and returns the error.
    #[track_caller]
    pub(crate) fn apply_err(mut self, rule: &impl Rule) -> SolveError {
        match rule.apply(&mut self.current) {
            Ok(()) => panic!("{} unexpectedly succeeded", rule.name()),
            Err(err) => err,
        }
    }

    /// Asserts that `cell` is now solved to `digit`.
    #[track_caller]
    pub(crate) fn assert_solved(self, cell: Cell, digit: Digit) -> Self {
        assert_eq!(
            self.current.solved_value(cell),
            Some(digit),
            "expected {cell} to be solved to {digit}, candidates are {}",
            self.current.candidates(cell)
        );
        self
    }

    /// Asserts that each of `digits` was a candidate at `cell` before the
    /// rule ran and is gone now.
    #[track_caller]
    pub(crate) fn assert_removed_includes(
        self,
        cell: Cell,
        digits: impl IntoIterator<Item = Digit>,
    ) -> Self {
        for digit in digits {
            assert!(
                self.initial.candidates(cell).contains(digit),
                "digit {digit} was not a candidate at {cell} to begin with"
            );
            assert!(
                !self.current.candidates(cell).contains(digit),
                "digit {digit} was not removed from {cell}"
            );
        }
        self
    }

    /// Asserts that the candidates at `cell` are untouched.
    #[track_caller]
    pub(crate) fn assert_no_change(self, cell: Cell) -> Self {
        assert_eq!(
            self.current.candidates(cell),
            self.initial.candidates(cell),
            "candidates at {cell} changed"
        );
        self
    }
}
