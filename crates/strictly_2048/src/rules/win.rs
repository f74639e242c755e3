//! Win detection logic for 2048.

use super::super::{Board, WIN_TILE};
use tracing::instrument;

/// Checks if any tile has reached 2048.
#[instrument(skip(board))]
pub fn has_won(board: &Board) -> bool {
    board.rows().iter().flatten().any(|&v| v == WIN_TILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_won() {
        assert!(!has_won(&Board::new()));
    }

    #[test]
    fn test_2048_tile_wins() {
        let rows = [[0; 4], [0, 0, 2048, 0], [0; 4], [2, 0, 0, 0]];
        assert!(has_won(&Board::from_rows(rows).unwrap()));
    }

    #[test]
    fn test_1024_tiles_do_not_win() {
        let rows = [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert!(!has_won(&Board::from_rows(rows).unwrap()));
    }
}
