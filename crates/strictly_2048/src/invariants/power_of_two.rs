//! Tile values are zero or powers of two no smaller than 2.

use super::super::game::GameState;
use super::super::types::is_valid_tile;
use super::Invariant;

/// Invariant: every tile is 0 or 2^k with 1 <= k <= 17.
///
/// Merges double a value and spawns place 2 or 4, so no other value can
/// appear.
pub struct PowerOfTwoTilesInvariant;

impl Invariant<GameState> for PowerOfTwoTilesInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().rows().iter().flatten().all(|&v| is_valid_tile(v))
    }

    fn description() -> &'static str {
        "Tiles are zero or powers of two from 2 to 2^17"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_valid_board_holds() {
        let board = Board::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [2048, 0, 0, 0]]).unwrap();
        assert!(PowerOfTwoTilesInvariant::holds(&GameState::resume(board, 0, 0)));
    }

    #[test]
    fn test_one_is_rejected() {
        let mut state = GameState::resume(Board::new(), 0, 0);
        state.board.set(Position::new(1, 2).unwrap(), 1);
        assert!(!PowerOfTwoTilesInvariant::holds(&state));
    }
}
