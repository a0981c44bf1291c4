//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record the player's
//! intent and can be replayed or serialized independently of execution.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable. `SquareOccupied` and `GameOver`
/// correspond to input the UI should have blocked and may be ignored
/// silently; `OutOfRange` and `NoLegalMoves` indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The cell index is outside the board.
    #[display("cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,

    /// No empty square remains to select a move from.
    #[display("no legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for MoveError {}
