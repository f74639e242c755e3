//! Core domain types for 2048.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 4;

/// Tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// Raw row-major tile grid.
pub type Rows = [[u32; SIZE]; SIZE];

/// Largest tile a 4x4 board can hold (2^17).
///
/// Tiles of this value never merge.
pub const MAX_TILE: u32 = 1 << 17;

/// Returns true if `value` may sit on the board (zero or 2^k with 1 <= k <= 17).
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// 4x4 board of tile values, 0 meaning empty.
///
/// Every non-zero tile is a power of two no smaller than 2. The board is a
/// plain value: moves produce a new board instead of editing a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Board {
    /// Tiles in row-major order.
    cells: Rows,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows, validating every tile.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidTile` for the first tile that is neither
    /// zero nor a power of two between 2 and [`MAX_TILE`].
    #[instrument]
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        for pos in Position::ALL {
            let value = rows[pos.row()][pos.col()];
            if !is_valid_tile(value) {
                return Err(BoardError::InvalidTile {
                    position: pos,
                    value,
                });
            }
        }
        Ok(Self { cells: rows })
    }

    /// Gets the tile at the given position.
    pub fn get(&self, pos: Position) -> u32 {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the tile at the given position.
    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        self.cells[pos.row()][pos.col()] = value;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Formats the board as a fixed-width text grid, `.` for empty cells.
    pub fn display(&self) -> String {
        let width = self.highest_tile().to_string().len().max(4);
        let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(SIZE));
        let mut result = String::new();
        result.push_str(&border);
        for row in &self.cells {
            result.push('\n');
            result.push('|');
            for &value in row {
                let symbol = if value == 0 {
                    ".".to_string()
                } else {
                    value.to_string()
                };
                result.push_str(&format!(" {:>width$} |", symbol, width = width));
            }
            result.push('\n');
            result.push_str(&border);
        }
        result
    }
}

impl TryFrom<Rows> for Board {
    type Error = BoardError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Error building a board from raw values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A tile is neither zero nor a power of two in `2..=MAX_TILE`.
    #[display("Invalid tile {} at {}", value, position)]
    InvalidTile {
        /// Where the bad tile sits.
        position: Position,
        /// The offending value.
        value: u32,
    },
}

impl std::error::Error for BoardError {}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are accepted.
    #[display("playing")]
    Playing,
    /// A 2048 tile was reached.
    #[display("won")]
    Won,
    /// No legal move remains.
    #[display("over")]
    Over,
}

impl GameStatus {
    /// Returns true for `Won` and `Over`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tiles() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(2048));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(MAX_TILE * 2));
        assert!(!is_valid_tile(1 << 31));
    }

    #[test]
    fn test_from_rows_rejects_bad_tile() {
        let rows = [[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 12, 0], [0, 0, 0, 0]];
        let err = Board::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidTile {
                position: Position::new(2, 2).unwrap(),
                value: 12
            }
        );
    }

    #[test]
    fn test_empty_cells_and_highest() {
        let rows = [[2, 0, 0, 0], [0, 64, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]];
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(board.empty_cells().len(), 13);
        assert_eq!(board.highest_tile(), 64);
        assert_eq!(board.tile_sum(), 74);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let rows = [[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2048]];
        let text = Board::from_rows(rows).unwrap().display();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("2048"));
        assert!(text.contains('.'));
    }

    #[test]
    fn test_deserialize_validates() {
        let bad = "[[3,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]";
        assert!(serde_json::from_str::<Board>(bad).is_err());
        let good = "[[2,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,4]]";
        let board: Board = serde_json::from_str(good).unwrap();
        assert_eq!(board.tile_sum(), 6);
    }
}
