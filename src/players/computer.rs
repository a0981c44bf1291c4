//! Computer player: optimal selection presented after a thinking delay.

use super::Player;
use crate::ai;
use crate::game::{Game, Mark, Position};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Computer player backed by the minimax selector.
///
/// The move is decided synchronously before the delay starts; the pause
/// only defers when the already-decided move is presented, so the human
/// perceives the computer thinking. Tests can set a zero delay.
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player for the given mark with the default
    /// 400 ms thinking delay.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            delay: Duration::from_millis(400),
        }
    }

    /// Overrides the thinking delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        let position = ai::best_move(game.board(), self.mark)?;
        debug!(player = %self.name, %position, "computer decided");

        tokio::time::sleep(self.delay).await;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
