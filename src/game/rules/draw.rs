//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full AND no winner.
///
/// A full board where someone holds a line is a win, not a draw, so the
/// winner check comes first.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
