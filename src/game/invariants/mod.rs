//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that hold for every game reached by
//! legal play. They are testable independently and serve as documentation
//! of the engine's guarantees.
//!
//! `AlternatingTurn` is the one property undo can step outside of: a
//! retraction always resets the turn to X, so a two-player game undone
//! from an odd-length history may continue with two X moves in a row on
//! the board. `MonotonicBoard` and `HistoryConsistent` survive
//! retractions because the history records which player made each move.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use monotonic_board::MonotonicBoard;

use super::engine::Game;

/// A logical property that must hold for a game state.
pub trait Invariant {
    /// Checks if the invariant holds for the given game.
    fn holds(game: &Game) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Checks every engine invariant, returning the descriptions of those
/// that fail.
pub fn violations(game: &Game) -> Vec<&'static str> {
    let mut failed = Vec::new();

    if !MonotonicBoard::holds(game) {
        failed.push(MonotonicBoard::description());
    }
    if !AlternatingTurn::holds(game) {
        failed.push(AlternatingTurn::description());
    }
    if !HistoryConsistent::holds(game) {
        failed.push(HistoryConsistent::description());
    }

    failed
}
