//! Alternating turn invariant: X and O take turns, X first.

use super::super::engine::Game;
use super::super::types::{Player, Square};
use super::Invariant;

/// Invariant: mark counts alternate and agree with the side to move.
///
/// X moves first, so the X-count either equals the O-count (X to move)
/// or exceeds it by one (O to move). Holds for every game reached by
/// legal play without retractions; undo's turn reset to X can break it
/// in two-player games (see the module docs).
pub struct AlternatingTurn;

impl Invariant for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let x_count = count(game, Player::X);
        let o_count = count(game, Player::O);

        match game.to_move() {
            Player::X => x_count == o_count,
            Player::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "mark counts alternate and agree with the side to move"
    }
}

fn count(game: &Game, player: Player) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}
