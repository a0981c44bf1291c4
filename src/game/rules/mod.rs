//! Pure rule predicates: win lines, draw detection, status derivation.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, wins};

use super::types::{Board, GameStatus};

/// Derives the game status from the board alone.
///
/// The winner check runs before the draw check: a full board where a
/// player holds a line is a win, not a draw.
pub fn derive_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
