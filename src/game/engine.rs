//! The live game aggregate: board, turn, status, and move history.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Holds the board, the side to move, the cached status, and the move
/// history in play order. All mutation goes through [`Game::make_move`]
/// and [`Game::retract_last`]; the engine performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the move history in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at the given cell index (0-8).
    ///
    /// On success the square is set, the move is appended to the history,
    /// the turn flips, and the status is re-derived from the board. No
    /// other square changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the status is already terminal
    /// - [`MoveError::OutOfRange`] if the index is outside 0-8
    /// - [`MoveError::SquareOccupied`] if the cell is non-empty
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.to_move = player.opponent();
        self.status = rules::derive_status(&self.board);

        debug!(position = %pos, status = ?self.status, "move applied");
        Ok(())
    }

    /// Retracts the last move, if any.
    ///
    /// Empties the square, clears terminal status, and resets the turn
    /// to X. The turn reset matches the session's undo contract: undo
    /// always returns the game to X's decision point.
    #[instrument(skip(self))]
    pub fn retract_last(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;
        self.board.set(mov.position(), Square::Empty);
        self.status = GameStatus::InProgress;
        self.to_move = Player::X;

        debug!(retracted = %mov, "move retracted");
        Some(mov)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
