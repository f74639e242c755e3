//! Contract-based validation for 2048 turns.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Direction, TurnError};
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet};
use super::GameStatus;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), TurnError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), TurnError>;
}

// ─────────────────────────────────────────────────────────────
//  Turn Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or lost.
pub struct GameIsLive;

impl GameIsLive {
    /// Fails with the terminal status if the game already ended.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), TurnError> {
        match state.status() {
            GameStatus::Playing => Ok(()),
            status => Err(TurnError::GameFinished(status)),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: merges conserve tile value and the spawn adds a 2 or a 4.
///
/// Merging two tiles of value `v` leaves `2v` on the board, so the tile sum
/// only grows by the spawned tile: `sum(after) = sum(before) + 2 or 4`.
pub struct TileSumConserved;

impl TileSumConserved {
    /// Returns true if the tile sum grew by exactly 2 or 4.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let expected = before.board().tile_sum();
        let actual = after.board().tile_sum();
        let valid = actual == expected + 2 || actual == expected + 4;
        if !valid {
            warn!(expected, actual, "Tile sum not conserved");
        }
        valid
    }
}

/// Postcondition: score and best never decrease, flags never clear.
pub struct MonotonicProgress;

impl MonotonicProgress {
    /// Returns true if nothing moved backwards.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let valid = after.score() >= before.score()
            && after.best() >= before.best()
            && (!before.is_won() || after.is_won())
            && (!before.is_over() || after.is_over())
            && after.moves() == before.moves() + 1;
        if !valid {
            warn!(
                before_score = before.score(),
                after_score = after.score(),
                "Monotonic progress violated"
            );
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for accepted turns.
///
/// Preconditions:
/// - Game is still being played
///
/// Postconditions:
/// - Tile sum grows by exactly the spawned tile
/// - Score, best and terminal flags only move forward
/// - All state invariants hold
pub struct TurnContract;

impl Contract<GameState, Direction> for TurnContract {
    fn pre(state: &GameState, _direction: &Direction) -> Result<(), TurnError> {
        GameIsLive::check(state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), TurnError> {
        if !TileSumConserved::holds(before, after) {
            return Err(TurnError::InvariantViolation(
                "Postcondition failed: tile sum not conserved".to_string(),
            ));
        }
        if !MonotonicProgress::holds(before, after) {
            return Err(TurnError::InvariantViolation(
                "Postcondition failed: progress moved backwards".to_string(),
            ));
        }
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TurnError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::spawn::FixedSequence;
    use crate::store::MemoryStore;
    use crate::{Board, Position};

    fn playing(rows: [[u32; 4]; 4]) -> GameState {
        GameState::resume(Board::from_rows(rows).unwrap(), 0, 0)
    }

    #[test]
    fn test_precondition_live_game() {
        let state = playing([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(TurnContract::pre(&state, &Direction::Left).is_ok());
    }

    #[test]
    fn test_precondition_finished_game() {
        let state = playing([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(
            TurnContract::pre(&state, &Direction::Down),
            Err(TurnError::GameFinished(GameStatus::Won))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = Game::new(FixedSequence::new([0.3, 0.5]), MemoryStore::new());
        let before = playing([[2, 2, 4, 0], [0, 4, 0, 4], [0; 4], [0; 4]]);
        let after = game.apply_move(before.clone(), Direction::Left).into_state();
        assert!(TurnContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_across_merges() {
        let before = playing([[2, 2, 0, 0], [4, 4, 8, 8], [0; 4], [0; 4]]);
        let mut after = before.clone();
        after.board = Board::from_rows([[4, 0, 0, 0], [8, 16, 0, 0], [0; 4], [0, 0, 0, 2]]).unwrap();
        after.score = 28;
        after.best = 28;
        after.history.push(Direction::Left);

        assert!(TileSumConserved::holds(&before, &after));
        assert!(TurnContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_created_value() {
        let mut game = Game::new(FixedSequence::new([0.3, 0.5]), MemoryStore::new());
        let before = playing([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut after = game.apply_move(before.clone(), Direction::Left).into_state();

        // Corrupt the board with a tile no move produced.
        after.board.set(Position::new(3, 3).unwrap(), 64);

        assert!(TurnContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_score_regression() {
        let mut game = Game::new(FixedSequence::new([0.3, 0.5]), MemoryStore::new());
        let mut before = playing([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        before.score = 100;
        before.best = 100;
        let mut after = game.apply_move(before.clone(), Direction::Left).into_state();
        after.score = 50;

        assert!(TurnContract::post(&before, &after).is_err());
    }
}
