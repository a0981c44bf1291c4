//! Noughts - a tic-tac-toe engine with an optimal computer opponent
//!
//! The crate is split into a pure core and a thin async shell:
//!
//! - **Engine** (`game`): board state, move validation, win/draw detection,
//!   and an undo-capable move history
//! - **Selector** (`ai`): exhaustive minimax search returning the optimal
//!   cell for a given mark
//! - **Session**: game mode (two-player or vs-computer), in-place reset,
//!   mode-aware undo, and score keeping
//! - **Players**: async seam between the engine and whatever feeds it moves
//!   (an input dispatcher, the minimax selector behind a thinking delay)
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Mode, Session};
//!
//! # fn main() -> Result<(), noughts::MoveError> {
//! let mut session = Session::new(Mode::VsComputer);
//! session.play(4)?; // X takes the center
//!
//! let reply = noughts::best_move(session.game().board(), Mark::O)?;
//! session.play(reply.to_index())?;
//!
//! assert_eq!(session.game().history().len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod game;
mod orchestrator;
mod players;
mod score;
mod session;

// Crate-level exports - move selection
pub use ai::best_move;

// Crate-level exports - engine types
pub use game::{
    invariants, rules, Board, Game, GameStatus, Mark, Move, MoveError, Position, Square,
};

// Crate-level exports - session management
pub use score::ScoreBoard;
pub use session::{Mode, Session};

// Crate-level exports - async players and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player};
