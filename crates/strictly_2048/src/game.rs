//! Game state and turn orchestration.
//!
//! [`GameState`] is a plain value: every operation takes the current state
//! and hands back the next one, so the caller owns the live game and no
//! partially updated board is ever observable. [`Game`] holds the two
//! collaborators a turn needs, the random source and the best-score store.

use super::contracts::{Contract, TurnContract};
use super::rules::{has_won, is_over, resolve};
use super::spawn::{RandomSource, Spawned, spawn};
use super::store::{BestScoreStore, load_best, save_best};
use super::{Board, Direction, GameStatus, Position};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of tiles placed when a game starts.
pub const STARTING_TILES: usize = 2;

/// Complete game state.
///
/// Deserialized snapshots go through [`GameState::resume`]: stored `won` and
/// `over` flags are ignored and rederived from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Snapshot")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) score: u64,
    pub(crate) best: u64,
    pub(crate) won: bool,
    pub(crate) over: bool,
    pub(crate) history: Vec<Direction>,
}

impl GameState {
    /// Rebuilds a state from a stored snapshot.
    ///
    /// `won` and `over` are derived from the board, win first. `best` is
    /// raised to `score` if it lags behind.
    #[instrument(skip(board))]
    pub fn resume(board: Board, score: u64, best: u64) -> Self {
        let won = has_won(&board);
        let over = !won && is_over(&board);
        Self {
            board,
            score,
            best: best.max(score),
            won,
            over,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best score seen, including previous games.
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Largest tile on the board.
    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    /// Returns true once a 2048 tile has been reached.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns true once no legal move remains.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Tile at `(row, col)`, `None` if off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<u32> {
        Position::new(row, col).map(|pos| self.board.get(pos))
    }

    /// Game status; a win takes precedence over a loss.
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Over
        } else {
            GameStatus::Playing
        }
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Direction] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Read-only summary for end-of-game displays.
    pub fn summary(&self) -> GameSummary {
        GameSummary::new(
            self.score,
            self.best,
            self.highest_tile(),
            self.moves(),
            self.status(),
        )
    }
}

/// Stored form of a [`GameState`].
#[derive(Deserialize)]
struct Snapshot {
    board: Board,
    score: u64,
    best: u64,
    #[serde(default)]
    history: Vec<Direction>,
}

impl From<Snapshot> for GameState {
    fn from(snapshot: Snapshot) -> Self {
        let mut state = GameState::resume(snapshot.board, snapshot.score, snapshot.best);
        state.history = snapshot.history;
        state
    }
}

/// Final numbers of a game, as shown in an end-of-game dialog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct GameSummary {
    /// Score reached.
    score: u64,
    /// Best score at the time.
    best: u64,
    /// Largest tile on the board.
    highest_tile: u32,
    /// Accepted moves.
    moves: usize,
    /// Status at the time.
    status: GameStatus,
}

/// Result of offering a direction to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    state: GameState,
    changed: bool,
    score_delta: u64,
    spawned: Option<Spawned>,
}

impl Turn {
    fn rejected(state: GameState) -> Self {
        Self {
            state,
            changed: false,
            score_delta: 0,
            spawned: None,
        }
    }

    /// State after the turn (the input state when rejected).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the move was accepted.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Points gained by merges this turn.
    pub fn score_delta(&self) -> u64 {
        self.score_delta
    }

    /// Tile spawned after the move, if it was accepted.
    pub fn spawned(&self) -> Option<Spawned> {
        self.spawned
    }

    /// Consumes the turn, returning the next state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Consumes the turn, returning the next state and whether it changed.
    pub fn into_parts(self) -> (GameState, bool) {
        (self.state, self.changed)
    }
}

/// Turn engine owning the random source and the best-score store.
#[derive(Debug)]
pub struct Game<R, S> {
    rng: R,
    store: S,
}

impl<S: BestScoreStore> Game<StdRng, S> {
    /// Creates an engine with a deterministic generator.
    #[instrument(skip(store))]
    pub fn seeded(seed: u64, store: S) -> Self {
        Self::new(StdRng::seed_from_u64(seed), store)
    }

    /// Creates an engine seeded from the operating system.
    #[instrument(skip(store))]
    pub fn from_entropy(store: S) -> Self {
        Self::new(StdRng::from_os_rng(), store)
    }
}

impl<R: RandomSource, S: BestScoreStore> Game<R, S> {
    /// Creates an engine from its collaborators.
    pub fn new(rng: R, store: S) -> Self {
        Self { rng, store }
    }

    /// Returns the best-score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Splits the engine back into its collaborators.
    pub fn into_parts(self) -> (R, S) {
        (self.rng, self.store)
    }

    /// Starts a game: empty board, two spawned tiles, best from the store.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameState {
        let best = load_best(&self.store);
        self.fresh(best)
    }

    /// Starts over, keeping the best score of `state`.
    #[instrument(skip(self, state), fields(score = state.score, best = state.best))]
    pub fn restart(&mut self, state: GameState) -> GameState {
        info!(status = %state.status(), "Restarting game");
        self.fresh(state.best)
    }

    fn fresh(&mut self, best: u64) -> GameState {
        let mut board = Board::new();
        for _ in 0..STARTING_TILES {
            spawn(&mut board, &mut self.rng);
        }
        debug!(best, "New game ready");
        GameState {
            board,
            score: 0,
            best,
            won: false,
            over: false,
            history: Vec::new(),
        }
    }

    /// Applies one direction: resolve, spawn, then detect win or loss.
    ///
    /// A move that changes nothing, or any move on a finished game, is
    /// rejected and the state comes back untouched. Postconditions are
    /// checked in debug builds.
    #[instrument(skip(self, state), fields(direction = %direction, score = state.score))]
    pub fn apply_move(&mut self, state: GameState, direction: Direction) -> Turn {
        if let Err(e) = TurnContract::pre(&state, &direction) {
            debug!(error = %e, "Move ignored");
            return Turn::rejected(state);
        }

        let resolution = resolve(&state.board, direction);
        if resolution.is_noop() {
            debug!("Move rejected, board unchanged");
            return Turn::rejected(state);
        }

        #[cfg(debug_assertions)]
        let before = state.clone();

        let score_delta = *resolution.score_delta();
        let mut board = *resolution.board();
        let spawned = spawn(&mut board, &mut self.rng);

        let score = state.score + score_delta;
        let mut best = state.best;
        if score > best {
            best = score;
            save_best(&mut self.store, best);
        }

        // A winning turn skips the loss check.
        let won = has_won(&board);
        let over = !won && is_over(&board);

        let mut history = state.history;
        history.push(direction);

        let next = GameState {
            board,
            score,
            best,
            won,
            over,
            history,
        };

        match next.status() {
            GameStatus::Won => info!(score, moves = next.moves(), "Reached 2048"),
            GameStatus::Over => info!(score, moves = next.moves(), "No moves left"),
            GameStatus::Playing => debug!(score_delta, score, "Move applied"),
        }

        #[cfg(debug_assertions)]
        {
            let verdict = TurnContract::post(&before, &next);
            if let Err(e) = &verdict {
                tracing::error!(error = %e, "Turn contract violated");
            }
            debug_assert!(verdict.is_ok(), "turn contract violated");
        }

        Turn {
            state: next,
            changed: true,
            score_delta,
            spawned,
        }
    }

    /// Starts a new game and applies `moves` in order.
    ///
    /// Rejected moves are skipped. With a seeded source the result is
    /// reproducible.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&mut self, moves: &[Direction]) -> GameState {
        let mut state = self.new_game();
        for direction in moves {
            state = self.apply_move(state, *direction).into_state();
        }
        state
    }
}
