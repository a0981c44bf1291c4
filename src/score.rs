//! Win and draw counters driven by terminal status transitions.

use crate::game::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Running tally of finished games.
///
/// Not part of the engine state: the session feeds it each terminal
/// [`GameStatus`] and it counts. Reset and undo never touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games X has won.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games O has won.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Records a finished game. Ignores `InProgress`.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}
