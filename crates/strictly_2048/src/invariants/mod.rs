//! State invariants for 2048.
//!
//! Each invariant is a unit type naming one property every reachable
//! [`GameState`](crate::GameState) has. The turn contract checks the whole
//! [`GameInvariants`] set after every accepted move in debug builds.

#[cfg(kani)]
mod verification;

/// A property of a game state, checked without mutating it.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short text used when reporting a violation.
    fn description() -> &'static str;
}

/// A failed invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the failed invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps an invariant description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together; implemented for tuples of two or three.
///
/// Every member is evaluated, so one call reports all failures.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok(())` when the state is sound.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn verdict(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        verdict(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        verdict(violations)
    }
}

pub mod best_score;
pub mod power_of_two;
pub mod terminal_flags;

pub use best_score::BestCoversScoreInvariant;
pub use power_of_two::PowerOfTwoTilesInvariant;
pub use terminal_flags::TerminalFlagsInvariant;

/// All 2048 state invariants as a composable set.
pub type GameInvariants = (
    PowerOfTwoTilesInvariant,
    BestCoversScoreInvariant,
    TerminalFlagsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameState};
    use crate::store::MemoryStore;
    use crate::{Board, Direction, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let mut game = Game::seeded(3, MemoryStore::new());
        let state = game.new_game();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_replay() {
        let mut game = Game::seeded(11, MemoryStore::new());
        let moves = [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ];
        let state = game.replay(&moves);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameState::resume(Board::new(), 10, 10);
        state.board.set(Position::new(0, 0).unwrap(), 3);
        state.best = 5;

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_pair_set() {
        let state = GameState::resume(Board::new(), 0, 0);
        assert!(
            <(PowerOfTwoTilesInvariant, BestCoversScoreInvariant)>::check_all(&state).is_ok()
        );
    }
}
