//! Best score never trails the current score.

use super::super::game::GameState;
use super::Invariant;

/// Invariant: `best >= score`.
///
/// Best is raised whenever a turn pushes the score past it.
pub struct BestCoversScoreInvariant;

impl Invariant<GameState> for BestCoversScoreInvariant {
    fn holds(state: &GameState) -> bool {
        state.best() >= state.score()
    }

    fn description() -> &'static str {
        "Best score is at least the current score"
    }
}
