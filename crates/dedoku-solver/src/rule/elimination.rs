use dedoku_core::{Board, DigitSet, UnitKind};

use crate::{SolveError, rule::Rule};

/// Removes digits already solved within a unit from the unit's unsolved
/// cells.
///
/// This is the basic sudoku deduction: a digit placed in a unit cannot
/// recur elsewhere in that unit. One eliminator instance covers all nine
/// units of one kind; the rule shape is identical for rows, columns, and
/// boxes because only the cell enumeration differs.
#[derive(Debug, Clone, Copy)]
pub struct Eliminator {
    kind: UnitKind,
}

impl Eliminator {
    /// Creates an eliminator for the given unit kind.
    #[must_use]
    pub const fn new(kind: UnitKind) -> Self {
        Self { kind }
    }
}

impl Rule for Eliminator {
    fn name(&self) -> &'static str {
        match self.kind {
            UnitKind::Row => "row eliminator",
            UnitKind::Column => "column eliminator",
            UnitKind::Box => "box eliminator",
        }
    }

    fn apply(&self, board: &mut Board) -> Result<(), SolveError> {
        for unit in self.kind.units() {
            let mut solved = DigitSet::EMPTY;
            for cell in unit.cells() {
                if let Some(digit) = board.solved_value(cell) {
                    solved.insert(digit);
                }
            }
            if solved.is_empty() {
                continue;
            }
            for cell in unit.cells() {
                if !board.is_cell_solved(cell) {
                    board.remove_candidates(cell, solved);
                }
            }
        }
        Ok(())
    }
}
