//! Rows, columns, and 3x3 boxes.

use std::fmt::{self, Display};

use crate::Cell;

/// The three kinds of unit on a sudoku board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Horizontal rows.
    Row,
    /// Vertical columns.
    Column,
    /// 3x3 boxes.
    Box,
}

impl UnitKind {
    /// All three kinds, in row, column, box order.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Box];

    /// Returns an iterator over the nine units of this kind.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        (0..9).map(move |i| match self {
            Self::Row => Unit::Row(i),
            Self::Column => Unit::Column(i),
            Self::Box => Unit::Box(i),
        })
    }
}

/// A single row, column, or 3x3 box: a group of nine cells that must
/// contain each digit 1-9 exactly once in a solved board.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Cell, Unit};
///
/// let row = Unit::Row(3);
/// let cells: Vec<_> = row.cells().collect();
/// assert_eq!(cells.len(), 9);
/// assert_eq!(cells[0], Cell::new(3, 0));
/// assert_eq!(cells[8], Cell::new(3, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row identified by its index (0-8).
    Row(u8),
    /// A column identified by its index (0-8).
    Column(u8),
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl Unit {
    /// Returns an iterator over all 27 units in row, column, box order.
    pub fn all() -> impl Iterator<Item = Self> {
        UnitKind::ALL.into_iter().flat_map(UnitKind::units)
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        match self {
            Self::Row(_) => UnitKind::Row,
            Self::Column(_) => UnitKind::Column,
            Self::Box(_) => UnitKind::Box,
        }
    }

    /// Returns the cell at index `i` (0-8) within this unit.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8, or if the unit's own index is
    /// out of range.
    #[must_use]
    pub const fn cell(self, i: u8) -> Cell {
        match self {
            Self::Row(row) => Cell::new(row, i),
            Self::Column(col) => Cell::new(i, col),
            Self::Box(box_index) => Cell::from_box(box_index, i),
        }
    }

    /// Returns an iterator over the nine cells of this unit.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..9).map(move |i| self.cell(i))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "row {i}"),
            Self::Column(i) => write!(f, "column {i}"),
            Self::Box(i) => write!(f, "box {i}"),
        }
    }
}
