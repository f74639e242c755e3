//! Random tile spawning.
//!
//! Randomness is injected through [`RandomSource`] so games can be seeded
//! and replayed. Any `rand` generator works; [`FixedSequence`] scripts the
//! draws for tests.

use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Draws the next float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_float(&mut self) -> f64 {
        rand::Rng::random::<f64>(self)
    }
}

/// Scripted random source that cycles through fixed values.
///
/// Values outside `[0, 1)` are clamped into range.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// Creates a source cycling through `values` (a lone `0.0` when empty).
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_float(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Spawned {
    /// Cell that received the tile.
    pub position: Position,
    /// Tile value (2 or 4).
    pub value: u32,
}

/// Places a 2 (90%) or a 4 (10%) in a uniformly chosen empty cell.
///
/// The first draw picks the cell among the empty cells in row-major order,
/// the second picks the value. Returns `None` without drawing when the
/// board is full.
#[instrument(skip(board, rng))]
pub fn spawn<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawned> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("Board full, nothing spawned");
        return None;
    }

    let pick = (rng.next_float() * empty.len() as f64) as usize;
    let position = empty[pick.min(empty.len() - 1)];
    let value = if rng.next_float() < TWO_PROBABILITY { 2 } else { 4 };

    board.set(position, value);
    debug!(%position, value, "Spawned tile");
    Some(Spawned::new(position, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_spawn_fills_exactly_one_cell() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let spawned = spawn(&mut board, &mut rng).unwrap();
        assert_eq!(board.empty_cells().len(), 15);
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(board.get(spawned.position), spawned.value);
    }

    #[test]
    fn test_spawn_on_full_board() {
        let mut board = Board::from_rows([[2; 4]; 4]).unwrap();
        let mut rng = FixedSequence::new([0.5]);
        assert_eq!(spawn(&mut board, &mut rng), None);
    }

    #[test]
    fn test_scripted_cell_and_value() {
        let mut board = Board::new();
        // Last empty cell, then a draw above 0.9 for a 4.
        let mut rng = FixedSequence::new([0.99, 0.95]);
        let spawned = spawn(&mut board, &mut rng).unwrap();
        assert_eq!(spawned.position, Position::new(3, 3).unwrap());
        assert_eq!(spawned.value, 4);
    }

    #[test]
    fn test_first_cell_gets_a_two() {
        let mut board = Board::new();
        let mut rng = FixedSequence::new([0.0, 0.0]);
        let spawned = spawn(&mut board, &mut rng).unwrap();
        assert_eq!(spawned, Spawned::new(Position::new(0, 0).unwrap(), 2));
    }

    #[test]
    fn test_fixed_sequence_clamps() {
        let mut rng = FixedSequence::new([1.5, -2.0]);
        assert!(rng.next_float() < 1.0);
        assert_eq!(rng.next_float(), 0.0);
    }
}
