//! Move selection for the computer opponent.

mod minimax;

pub use minimax::best_move;
