//! Terminal flags agree with the board.

use super::super::game::GameState;
use super::super::rules::available_moves;
use super::super::WIN_TILE;
use super::Invariant;

/// Invariant: `won` implies a tile of at least 2048, `over` implies no legal
/// move, and the two are never set together.
pub struct TerminalFlagsInvariant;

impl Invariant<GameState> for TerminalFlagsInvariant {
    fn holds(state: &GameState) -> bool {
        let won_ok = !state.is_won() || state.highest_tile() >= WIN_TILE;
        let over_ok = !state.is_over() || available_moves(state.board()).is_empty();
        let exclusive = !(state.is_won() && state.is_over());
        won_ok && over_ok && exclusive
    }

    fn description() -> &'static str {
        "Won and over flags agree with the board"
    }
}
