//! Game orchestration between players.

use crate::game::{GameStatus, Mark, Move, MoveError};
use crate::players::Player;
use crate::session::{Mode, Session};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Game state updated; carries the rendered board and the turn prompt.
    StateChanged {
        /// ASCII rendering of the board.
        board: String,
        /// Status line text.
        prompt: String,
    },
    /// The computer is about to present its reply.
    ComputerThinking,
    /// Move was made.
    MoveMade {
        /// Display name of the player who moved.
        player: String,
        /// The move that was applied.
        mov: Move,
    },
    /// Game ended.
    GameOver {
        /// Terminal status of the finished game.
        status: GameStatus,
    },
}

/// Orchestrates gameplay between two players over one session.
///
/// The loop awaits each player's reply before polling the other side,
/// so exactly one move is in flight at a time, and a computer reply
/// that has started always completes and applies.
pub struct Orchestrator {
    session: Session,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator. X moves first.
    pub fn new(
        mode: Mode,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: Session::new(mode),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the game loop until the session reaches a terminal status.
    pub async fn run(&mut self) -> Result<()> {
        info!(mode = ?self.session.mode(), "starting game loop");

        loop {
            self.event_tx.send(GameEvent::StateChanged {
                board: self.session.game().board().display(),
                prompt: self.session.turn_prompt(),
            })?;

            if self.session.game().is_over() {
                self.event_tx.send(GameEvent::GameOver {
                    status: self.session.game().status(),
                })?;
                return Ok(());
            }

            let mark = self.session.game().to_move();

            // In vs-computer mode O is the computer's side
            if self.session.mode() == Mode::VsComputer && mark == Mark::O {
                self.event_tx.send(GameEvent::ComputerThinking)?;
            }

            let player_name = match mark {
                Mark::X => self.player_x.name().to_string(),
                Mark::O => self.player_o.name().to_string(),
            };
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player_name, "waiting for move");
            let position = player.get_move(self.session.game()).await?;

            match self.session.play(position.to_index()) {
                Ok(_) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mov: Move::new(mark, position),
                    })?;
                }
                // Clicks the UI should have blocked; drop them and ask again
                Err(err @ (MoveError::SquareOccupied(_) | MoveError::GameOver)) => {
                    debug!(%err, "ignoring rejected input");
                }
                // Contract violations: the player handed us a move the
                // engine can never accept
                Err(err) => {
                    warn!(%err, player = %player_name, "player produced an illegal move");
                    return Err(err.into());
                }
            }
        }
    }

    /// Resets the session for another game, keeping mode and scores.
    pub fn restart(&mut self) {
        self.session.reset();
    }
}
