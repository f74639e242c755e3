//! Strictly 2048 - pure rule engine for the 4x4 sliding-tile puzzle.
//!
//! # Architecture
//!
//! - **Board**: fixed 4x4 grid of tiles, 0 meaning empty
//! - **Rules**: move resolution with merge semantics, win and loss detection
//! - **Spawner**: random 2/4 tile placement through an injected source
//! - **Game**: turn orchestration over an explicit [`GameState`] value
//! - **Contracts & invariants**: turn pre/postconditions checked in debug builds
//!
//! Rendering, input and persistence formats live outside this crate; they
//! consume [`GameState`] snapshots and feed [`Direction`] commands.
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Game, MemoryStore};
//!
//! let mut game = Game::seeded(42, MemoryStore::new());
//! let state = game.new_game();
//! let (state, _changed) = game.apply_move(state, Direction::Left).into_parts();
//! assert!(state.score() <= state.best());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod spawn;
mod store;
mod types;

// Crate-level exports - Domain types
pub use action::{Direction, ParseDirectionError, TurnError};
pub use position::Position;
pub use types::{Board, BoardError, GameStatus, MAX_TILE, Rows, SIZE, WIN_TILE, is_valid_tile};

// Crate-level exports - Rules
pub use rules::{
    Resolution, available_moves, can_move, has_adjacent_pair, has_won, is_full, is_over,
    merge_line, resolve,
};

// Crate-level exports - Spawning
pub use spawn::{FixedSequence, RandomSource, Spawned, TWO_PROBABILITY, spawn};

// Crate-level exports - Persistence boundary
pub use store::{BestScoreStore, MemoryStore, StoreError, load_best, save_best};

// Crate-level exports - Game engine
pub use game::{Game, GameState, GameSummary, STARTING_TILES, Turn};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GameIsLive, MonotonicProgress, TileSumConserved, TurnContract};
pub use invariants::{
    BestCoversScoreInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    PowerOfTwoTilesInvariant, TerminalFlagsInvariant,
};
