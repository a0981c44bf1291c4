//! History consistency invariant: the history describes the board.

use super::super::engine::Game;
use super::super::types::Square;
use super::Invariant;

/// Invariant: the move history matches the board exactly.
///
/// Every recorded move points at a square occupied by its player, the
/// recorded positions are distinct, and the history length equals the
/// number of occupied squares.
pub struct HistoryConsistent;

impl Invariant for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if game.history().len() != occupied {
            return false;
        }

        for (i, mov) in game.history().iter().enumerate() {
            if game.board().get(mov.position()) != Square::Occupied(mov.player()) {
                return false;
            }
            if game.history()[..i].iter().any(|m| m.position() == mov.position()) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "move history matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistent::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_moves_and_retraction() {
        let mut game = Game::new();
        for index in [4, 0, 2] {
            game.make_move(index).unwrap();
        }
        assert!(HistoryConsistent::holds(&game));

        game.retract_last();
        assert!(HistoryConsistent::holds(&game));
    }
}
