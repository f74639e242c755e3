//! Game rules for 2048.
//!
//! Pure functions over boards: sliding, win detection and loss
//! detection. They are kept apart from state bookkeeping so contracts
//! and invariants can reuse them.

pub mod over;
pub mod slide;
pub mod win;

pub use over::{has_adjacent_pair, is_full, is_over};
pub use slide::{Resolution, available_moves, can_move, merge_line, resolve};
pub use win::has_won;
