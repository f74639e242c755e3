//! Direction commands.
//!
//! A direction is the only input a turn accepts. It is an exhaustive enum,
//! so a malformed command can only appear at the text boundary, where
//! parsing rejects it.

use super::position::Position;
use super::types::{GameStatus, SIZE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Direction in which every tile slides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Tiles slide toward row 0.
    #[display("up")]
    Up,
    /// Tiles slide toward row 3.
    #[display("down")]
    Down,
    /// Tiles slide toward column 0.
    #[display("left")]
    Left,
    /// Tiles slide toward column 3.
    #[display("right")]
    Right,
}

impl Direction {
    /// Positions of line `index` ordered in the direction of travel.
    ///
    /// The first position is the edge tiles slide toward. Rows are used for
    /// horizontal moves and columns for vertical ones.
    pub fn line(self, index: usize) -> [Position; SIZE] {
        let mut line = [Position::at(0, 0); SIZE];
        for (step, slot) in line.iter_mut().enumerate() {
            let back = SIZE - 1 - step;
            *slot = match self {
                Direction::Left => Position::at(index, step),
                Direction::Right => Position::at(index, back),
                Direction::Up => Position::at(step, index),
                Direction::Down => Position::at(back, index),
            };
        }
        line
    }
}

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::iter()
            .find(|dir| dir.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError::new(s))
    }
}

/// Text that does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown direction: {:?}", input)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl ParseDirectionError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl std::error::Error for ParseDirectionError {}

/// Error that can occur when validating or applying a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The game already ended; only a restart is accepted.
    #[display("Game is already {}", _0)]
    GameFinished(GameStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for TurnError {}
