//! Loss detection logic for 2048.

use super::super::{Board, MAX_TILE, Position, SIZE};
use tracing::instrument;

/// Checks if the board is full.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|&v| v != 0)
}

/// Checks if some tile equals its right or lower neighbour and can merge.
///
/// Only right and down are inspected; every adjacent pair is still covered
/// once. [`MAX_TILE`] pairs do not count.
pub fn has_adjacent_pair(board: &Board) -> bool {
    Position::ALL.iter().any(|pos| {
        let value = board.get(*pos);
        if value == MAX_TILE {
            return false;
        }
        let right = (pos.col() + 1 < SIZE)
            .then(|| board.get(Position::at(pos.row(), pos.col() + 1)));
        let down = (pos.row() + 1 < SIZE)
            .then(|| board.get(Position::at(pos.row() + 1, pos.col())));
        right == Some(value) || down == Some(value)
    })
}

/// Checks if no legal move remains: no empty cell and no mergeable pair.
#[instrument(skip(board))]
pub fn is_over(board: &Board) -> bool {
    is_full(board) && !has_adjacent_pair(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: [[u32; 4]; 4] = [
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ];

    #[test]
    fn test_empty_cell_not_over() {
        let mut rows = LOCKED;
        rows[3][3] = 0;
        assert!(!is_over(&Board::from_rows(rows).unwrap()));
    }

    #[test]
    fn test_locked_board_is_over() {
        let board = Board::from_rows(LOCKED).unwrap();
        assert!(is_full(&board));
        assert!(is_over(&board));
    }

    #[test]
    fn test_max_tile_pair_does_not_unlock() {
        let mut rows = LOCKED;
        rows[0][0] = MAX_TILE;
        rows[0][1] = MAX_TILE;
        let board = Board::from_rows(rows).unwrap();
        assert!(!has_adjacent_pair(&board));
        assert!(is_over(&board));
    }

    #[test]
    fn test_horizontal_pair_not_over() {
        let mut rows = LOCKED;
        rows[0][1] = 2;
        assert!(!is_over(&Board::from_rows(rows).unwrap()));
    }

    #[test]
    fn test_vertical_pair_in_last_column_not_over() {
        let mut rows = LOCKED;
        rows[2][3] = 2;
        assert!(!is_over(&Board::from_rows(rows).unwrap()));
    }
}
