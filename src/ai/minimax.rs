//! Exhaustive minimax search over the remaining game tree.

use crate::game::{rules, Board, MoveError, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Base score for a terminal win, before depth adjustment.
const WIN_SCORE: i32 = 10;

/// Returns the optimal cell for `mark` on the given board.
///
/// Full-depth minimax without pruning. A win for `mark` at depth `d`
/// scores `10 - d` and a loss scores `d - 10`, so the selector takes the
/// fastest win available and delays a forced loss as long as possible;
/// a draw scores 0. Among equally scored moves the first one in index
/// order 0-8 wins: the comparison is strictly-greater, so later ties
/// never displace the first-seen maximum.
///
/// The search works on a scratch copy of the board and restores each
/// square after scoring its branch; the caller's board is never touched.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMoves`] if the board is already terminal
/// (won or full).
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Player) -> Result<Position, MoveError> {
    if rules::check_winner(board).is_some() || rules::is_full(board) {
        return Err(MoveError::NoLegalMoves);
    }

    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in Position::iter() {
        if scratch.is_empty(pos) {
            scratch.set(pos, Square::Occupied(mark));
            let score = minimax(&mut scratch, mark, 0, false);
            scratch.set(pos, Square::Empty);

            if score > best_score {
                best_score = score;
                best = Some(pos);
            }
        }
    }

    best.ok_or(MoveError::NoLegalMoves)
}

/// Scores the board for `mark`, assuming optimal play from both sides.
///
/// `depth` counts plies below the board `best_move` was asked about;
/// `maximizing` is true when it is `mark`'s turn to place.
fn minimax(board: &mut Board, mark: Player, depth: i32, maximizing: bool) -> i32 {
    if rules::wins(board, mark) {
        return WIN_SCORE - depth;
    }
    if rules::wins(board, mark.opponent()) {
        return depth - WIN_SCORE;
    }
    if rules::is_full(board) {
        return 0;
    }

    let to_play = if maximizing { mark } else { mark.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::iter() {
        if board.is_empty(pos) {
            board.set(pos, Square::Occupied(to_play));
            let score = minimax(board, mark, depth + 1, !maximizing);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    best
}
