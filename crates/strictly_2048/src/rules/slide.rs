//! Move resolution: sliding and merging lines.

use super::super::{Board, Direction, MAX_TILE, SIZE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Outcome of resolving one direction against a board.
///
/// The input board is never modified; `board` is a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Resolution {
    /// Board after sliding and merging (before any spawn).
    board: Board,
    /// Sum of the values of all tiles created by merges.
    score_delta: u64,
    /// Whether any cell differs from the input board.
    changed: bool,
}

impl Resolution {
    /// Returns true if the move had no effect and must be rejected.
    pub fn is_noop(&self) -> bool {
        !self.changed
    }
}

/// Compacts and merges a single line given in travel order.
///
/// Non-zero values slide toward index 0. Equal neighbours merge greedily
/// from the leading edge, each tile merging at most once, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]` and `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
/// A pair of [`MAX_TILE`] tiles stays apart.
/// Returns the new line and the score gained.
pub fn merge_line(line: [u32; SIZE]) -> ([u32; SIZE], u64) {
    let mut tiles = line.iter().copied().filter(|&v| v != 0).peekable();
    let mut merged = [0u32; SIZE];
    let mut len = 0;
    let mut gained = 0u64;

    while let Some(tile) = tiles.next() {
        if tile < MAX_TILE && tiles.peek() == Some(&tile) {
            tiles.next();
            let doubled = tile * 2;
            merged[len] = doubled;
            gained += u64::from(doubled);
        } else {
            merged[len] = tile;
        }
        len += 1;
    }

    (merged, gained)
}

/// Slides every line of `board` in `direction`.
///
/// Rows are processed for left/right, columns for up/down. Each line is
/// read in travel order, merged with [`merge_line`], and written back to
/// the same cells.
#[instrument(skip(board), fields(direction = %direction))]
pub fn resolve(board: &Board, direction: Direction) -> Resolution {
    let mut next = *board;
    let mut score_delta = 0;

    for index in 0..SIZE {
        let cells = direction.line(index);
        let line = cells.map(|pos| board.get(pos));
        let (merged, gained) = merge_line(line);
        score_delta += gained;
        for (pos, value) in cells.into_iter().zip(merged) {
            next.set(pos, value);
        }
    }

    let changed = next != *board;
    trace!(score_delta, changed, "Resolved move");

    Resolution {
        board: next,
        score_delta,
        changed,
    }
}

/// Returns true if sliding in `direction` would change the board.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    resolve(board, direction).changed
}

/// Directions that would change the board.
#[instrument(skip(board))]
pub fn available_moves(board: &Board) -> Vec<Direction> {
    Direction::iter()
        .filter(|dir| can_move(board, *dir))
        .collect()
}
