//! The candidate board and its validators.

use derive_more::{Display, Error};

use crate::{Cell, Digit, DigitSet, Puzzle, Unit};

/// An attempt to force a cell to a digit that is no longer a candidate.
///
/// Forcing should only ever target current candidates, so outside the
/// trial search's error-driven elimination this indicates a logic fault
/// upstream. It is a hard error and is never silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cannot set {cell} to {digit}: remaining candidates are {candidates}")]
pub struct InvalidAssignment {
    /// The targeted cell.
    pub cell: Cell,
    /// The digit that was forced.
    pub digit: Digit,
    /// The candidates the cell actually held.
    pub candidates: DigitSet,
}

/// A digit appears more than once among the solved cells of one unit.
///
/// Raised by [`Board::validate`], both for an invalid given puzzle and for
/// a solver bug that silently produced a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("duplicate digit {digit} in {unit}")]
pub struct DuplicateValue {
    /// The unit containing the repeat.
    pub unit: Unit,
    /// The repeated digit.
    pub digit: Digit,
}

/// Per-cell candidate sets for a solve in progress.
///
/// Each of the 81 cells holds a [`DigitSet`] of the digits it could still
/// take. A cell with exactly one candidate is solved to that value; a cell
/// with zero candidates means the board is unsatisfiable. The board also
/// carries the change flag that drives fixed-point rule iteration: any
/// mutation of a candidate set raises it, and the driver resets it before
/// each pass.
///
/// Boards are cheap to clone, which the trial-and-backtrack search relies
/// on to discard failed trial mutations.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Board, Cell, Digit, DigitSet, Puzzle};
///
/// let mut board = Board::from_puzzle(&Puzzle::new());
/// assert!(!board.is_solved());
///
/// let five = Digit::new(5).unwrap();
/// board.set_value(Cell::new(4, 4), five)?;
/// assert_eq!(board.solved_value(Cell::new(4, 4)), Some(five));
/// assert!(board.changed());
/// # Ok::<(), dedoku_core::InvalidAssignment>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
    changed: bool,
}

impl Board {
    /// Seeds a fresh board from a given puzzle.
    ///
    /// A given digit seeds a singleton candidate set; a blank seeds the
    /// full set. The change flag starts lowered.
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut cells = [DigitSet::FULL; 81];
        for cell in Cell::all() {
            if let Some(digit) = puzzle.get(cell) {
                cells[cell.index()] = DigitSet::from_elem(digit);
            }
        }
        Self {
            cells,
            changed: false,
        }
    }

    /// Returns the candidate set at `cell`.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Returns `true` if the cell has exactly one candidate.
    #[must_use]
    pub fn is_cell_solved(&self, cell: Cell) -> bool {
        self.candidates(cell).len() == 1
    }

    /// Returns the sole candidate at `cell`, or `None` if the cell is not
    /// solved.
    #[must_use]
    pub fn solved_value(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).single()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Cell::all().all(|cell| self.is_cell_solved(cell))
    }

    /// Returns `true` if any candidate set was mutated since the last
    /// [`reset_changed`](Self::reset_changed).
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Lowers the change flag.
    pub const fn reset_changed(&mut self) {
        self.changed = false;
    }

    /// Removes each digit in `digits` from the cell's candidate set.
    ///
    /// Raises the change flag iff at least one digit was actually present.
    /// Removing an empty set, or digits the cell does not carry, is a
    /// no-op. The set may become empty; the single-value seekers surface
    /// that as an unsatisfiable board.
    pub fn remove_candidates(&mut self, cell: Cell, digits: DigitSet) {
        let current = self.cells[cell.index()];
        let next = current.difference(digits);
        if next != current {
            self.cells[cell.index()] = next;
            self.changed = true;
        }
    }

    /// Forces a cell to a single value.
    ///
    /// A no-op if the cell is already solved to exactly `digit`; otherwise
    /// replaces the candidate set with the singleton and raises the change
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAssignment`] without mutating the board if `digit`
    /// is not currently a candidate of the cell.
    pub fn set_value(&mut self, cell: Cell, digit: Digit) -> Result<(), InvalidAssignment> {
        let candidates = self.cells[cell.index()];
        if !candidates.contains(digit) {
            return Err(InvalidAssignment {
                cell,
                digit,
                candidates,
            });
        }
        if candidates.single() == Some(digit) {
            return Ok(());
        }
        self.cells[cell.index()] = DigitSet::from_elem(digit);
        self.changed = true;
        Ok(())
    }

    /// Checks that no digit appears twice among the solved cells of any
    /// row, column, or box.
    ///
    /// Unsolved cells are ignored, so this accepts any board that has not
    /// yet contradicted itself. It is run before solving to reject an
    /// invalid given puzzle and after solving to catch engine bugs.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateValue`] naming the first offending unit and
    /// digit.
    pub fn validate(&self) -> Result<(), DuplicateValue> {
        for unit in Unit::all() {
            let mut seen = DigitSet::EMPTY;
            for cell in unit.cells() {
                if let Some(digit) = self.solved_value(cell) {
                    if seen.contains(digit) {
                        return Err(DuplicateValue { unit, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        Ok(())
    }

    /// Exports the board back to the given-puzzle display form.
    ///
    /// Solved cells become digits; everything else becomes a blank.
    #[must_use]
    pub fn to_puzzle(&self) -> Puzzle {
        let mut puzzle = Puzzle::new();
        for cell in Cell::all() {
            puzzle.set(cell, self.solved_value(cell));
        }
        puzzle
    }
}
