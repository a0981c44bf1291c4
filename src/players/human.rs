//! Human player fed by an input dispatcher.

use super::Player;
use crate::game::{Game, Position};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::warn;

/// Human player reading cell indices from a channel.
///
/// The input dispatcher (click handler, key reader) sends raw cell
/// indices; anything outside 0-8 is ignored here, while occupied-square
/// clicks are left for the engine to reject.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<usize>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<usize>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        while let Some(index) = self.input_rx.recv().await {
            match Position::from_index(index) {
                Some(pos) => return Ok(pos),
                None => warn!(index, "ignoring input outside the board"),
            }
        }

        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
