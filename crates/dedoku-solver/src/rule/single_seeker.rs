use dedoku_core::{Board, Cell, Digit, UnitKind};

use crate::{SolveError, rule::Rule};

/// Forces a digit into the only cell of a unit that can still take it.
///
/// For every unit of its kind and every digit, the seeker scans which of
/// the unit's nine cells carry the digit as a candidate:
///
/// - none: the board is unsatisfiable, since the unit must contain the
///   digit somewhere
/// - exactly one, not yet solved: the digit is forced there
/// - exactly one, already solved (necessarily to that digit): no-op
/// - several: no deduction
#[derive(Debug, Clone, Copy)]
pub struct SingleSeeker {
    kind: UnitKind,
}

impl SingleSeeker {
    /// Creates a seeker for the given unit kind.
    #[must_use]
    pub const fn new(kind: UnitKind) -> Self {
        Self { kind }
    }
}

impl Rule for SingleSeeker {
    fn name(&self) -> &'static str {
        match self.kind {
            UnitKind::Row => "row single seeker",
            UnitKind::Column => "column single seeker",
            UnitKind::Box => "box single seeker",
        }
    }

    fn apply(&self, board: &mut Board) -> Result<(), SolveError> {
        for unit in self.kind.units() {
            for digit in Digit::ALL {
                let mut found: Option<Cell> = None;
                let mut unique = true;
                for cell in unit.cells() {
                    if board.candidates(cell).contains(digit) {
                        if found.is_none() {
                            found = Some(cell);
                        } else {
                            unique = false;
                            break;
                        }
                    }
                }
                match found {
                    None => return Err(SolveError::UnsatisfiableUnit { unit, digit }),
                    Some(cell) if unique && !board.is_cell_solved(cell) => {
                        board.set_value(cell, digit)?;
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}
