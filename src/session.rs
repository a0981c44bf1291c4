//! Game session management: mode, reset, and mode-aware undo.

use crate::game::{Game, GameStatus, Mark, MoveError};
use crate::score::ScoreBoard;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How the session is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays X against the computer's O.
    VsComputer,
}

/// The live aggregate of one game session.
///
/// Created at program start or on mode switch, mutated by each accepted
/// move or undo, and reset in place - never destroyed mid-process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    game: Game,
    mode: Mode,
    scores: ScoreBoard,
}

impl Session {
    /// Creates a fresh session in the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "creating session");
        Self {
            game: Game::new(),
            mode,
            scores: ScoreBoard::new(),
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the running score.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Plays the current side's mark at the given cell index (0-8).
    ///
    /// Returns the status after the move. A terminal status is recorded
    /// on the score board.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the engine; the session is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.game.make_move(index)?;

        let status = self.game.status();
        if status.is_terminal() {
            self.scores.record(status);
            info!(?status, "game finished");
        }
        Ok(status)
    }

    /// Undoes the last move(s), returning how many plies were retracted.
    ///
    /// In `VsComputer` mode with at least two moves recorded, two plies
    /// come off - the computer's reply and the human move that triggered
    /// it - so the human always returns to a human decision point. A
    /// single recorded move comes off alone. Undo on an empty history is
    /// a no-op. Terminal status is cleared and the turn returns to X.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> usize {
        let mut undone = 0;

        if self.mode == Mode::VsComputer
            && self.game.history().len() >= 2
            && self.game.retract_last().is_some()
        {
            undone += 1;
        }
        if self.game.retract_last().is_some() {
            undone += 1;
        }

        debug!(undone, "undo applied");
        undone
    }

    /// Resets the game in place: empty board, empty history, turn X.
    ///
    /// The mode and the score board are preserved.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(mode = ?self.mode, "resetting session");
        self.game = Game::new();
    }

    /// Switches the mode and resets the game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Phrases the state of the game for a status line.
    pub fn turn_prompt(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => match self.mode {
                Mode::VsComputer => {
                    if self.game.to_move() == Mark::X {
                        "Your turn (X)".to_string()
                    } else {
                        "Computer's turn (O)".to_string()
                    }
                }
                Mode::TwoPlayer => format!("Turn: {}", self.game.to_move()),
            },
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::VsComputer)
    }
}
