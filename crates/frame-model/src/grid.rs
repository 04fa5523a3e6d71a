//! Sensor grid geometry.
//!
//! Cells are stored row-major: `index = row * ROW_LENGTH + column`.

use serde::{Deserialize, Serialize};

/// Total number of cells in a frame.
pub const SIZE: usize = 64;

/// Number of columns per row.
pub const ROW_LENGTH: usize = 8;

/// Number of rows in a frame.
pub const ROW_COUNT: usize = SIZE / ROW_LENGTH;

/// A cell address on the sensor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, `0..ROW_LENGTH`.
    pub column: usize,
    /// Row, `0..ROW_COUNT`.
    pub row: usize,
}

impl GridPos {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Address of the cell at flat index `index`.
    ///
    /// Indices outside `0..SIZE` produce rows beyond the grid; callers
    /// iterate frames, which never hand out such indices.
    pub fn from_index(index: usize) -> Self {
        Self {
            column: index % ROW_LENGTH,
            row: index / ROW_LENGTH,
        }
    }

    /// Flat row-major index of this cell.
    pub fn index(&self) -> usize {
        self.row * ROW_LENGTH + self.column
    }

    /// Whether this address lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.column < ROW_LENGTH && self.row < ROW_COUNT
    }

    /// Chebyshev (chessboard) distance: the larger of the column and row deltas.
    pub fn chebyshev_distance(&self, other: &GridPos) -> usize {
        self.column
            .abs_diff(other.column)
            .max(self.row.abs_diff(other.row))
    }

    /// Whether `other` shares or touches this cell, diagonals included.
    pub fn is_adjacent(&self, other: &GridPos) -> bool {
        self.chebyshev_distance(other) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_grid() {
        for i in 0..SIZE {
            let pos = GridPos::from_index(i);
            assert!(pos.in_bounds());
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_row_major_addressing() {
        assert_eq!(GridPos::from_index(0), GridPos::new(0, 0));
        assert_eq!(GridPos::from_index(7), GridPos::new(7, 0));
        assert_eq!(GridPos::from_index(8), GridPos::new(0, 1));
        assert_eq!(GridPos::from_index(63), GridPos::new(7, 7));
        assert_eq!(ROW_COUNT, 8);
    }

    #[test]
    fn test_adjacency_includes_diagonals_and_self() {
        let center = GridPos::new(3, 3);
        assert!(center.is_adjacent(&center));
        assert!(center.is_adjacent(&GridPos::new(4, 4)));
        assert!(center.is_adjacent(&GridPos::new(2, 4)));
        assert!(!center.is_adjacent(&GridPos::new(5, 3)));
        assert!(!center.is_adjacent(&GridPos::new(3, 1)));
        assert_eq!(center.chebyshev_distance(&GridPos::new(0, 7)), 4);
    }
}
