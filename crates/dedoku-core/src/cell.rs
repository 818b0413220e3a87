//! Board coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// Rows and columns are both indexed 0-8, row 0 at the top and column 0 at
/// the left.
///
/// # Examples
///
/// ```
/// use dedoku_core::Cell;
///
/// let cell = Cell::new(4, 7);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates the cell at index `i` (0-8, row-major) within a 3x3 box.
    ///
    /// Boxes are indexed 0-8, left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self::new((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3x3 box containing this cell.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }

    pub(crate) const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::new(0, 0).box_index(), 0);
        assert_eq!(Cell::new(0, 8).box_index(), 2);
        assert_eq!(Cell::new(4, 4).box_index(), 4);
        assert_eq!(Cell::new(8, 0).box_index(), 6);
        assert_eq!(Cell::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for box_index in 0..9 {
            for i in 0..9 {
                let cell = Cell::from_box(box_index, i);
                assert_eq!(cell.box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_all_is_row_major() {
        let cells: Vec<_> = Cell::all().collect();
        assert_eq!(cells.len(), 81);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[8], Cell::new(0, 8));
        assert_eq!(cells[9], Cell::new(1, 0));
        assert_eq!(cells[80], Cell::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_out_of_range_panics() {
        let _ = Cell::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(2, 7)), "r2c7");
    }
}
