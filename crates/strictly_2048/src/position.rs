//! Cell coordinates on the 4x4 board.

use super::types::SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed by row and column (both `0..4`).
///
/// Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major index (0-15).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates a position from a row-major index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Builds a position from coordinates already known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 16 positions in row-major order.
    pub const ALL: [Position; SIZE * SIZE] = {
        let mut all = [Position::at(0, 0); SIZE * SIZE];
        let mut i = 0;
        while i < SIZE * SIZE {
            all[i] = Position::at(i / SIZE, i % SIZE);
            i += 1;
        }
        all
    };
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Position::new(4, 0).is_none());
        assert!(Position::new(0, 4).is_none());
        assert!(Position::new(3, 3).is_some());
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(16), None);
    }
}
