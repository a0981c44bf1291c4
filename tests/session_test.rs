//! Integration tests for session flows: undo, reset, scores, snapshots.

use noughts::{best_move, Game, GameStatus, Mark, Mode, Position, Session};

#[test]
fn undo_returns_to_a_human_decision_point() {
    let mut session = Session::new(Mode::VsComputer);

    // Human plays the center, computer replies
    session.play(4).unwrap();
    let reply = best_move(session.game().board(), Mark::O).unwrap();
    session.play(reply.to_index()).unwrap();
    assert_eq!(session.game().history().len(), 2);

    // Undo pops both plies: board empty, history empty, X to move
    assert_eq!(session.undo(), 2);
    assert_eq!(session.game(), &Game::new());
    assert_eq!(session.game().to_move(), Mark::X);
    assert_eq!(session.game().status(), GameStatus::InProgress);
}

#[test]
fn undo_after_a_loss_reopens_the_game() {
    let mut session = Session::new(Mode::TwoPlayer);
    // X wins the left column
    for index in [0, 1, 3, 2, 6] {
        session.play(index).unwrap();
    }
    assert_eq!(session.game().status(), GameStatus::Won(Mark::X));
    assert_eq!(session.scores().x_wins(), 1);

    session.undo();
    assert_eq!(session.game().status(), GameStatus::InProgress);
    assert!(session.game().board().is_empty(Position::BottomLeft));
    // The tally keeps the recorded win; undo does not rewrite scores
    assert_eq!(session.scores().x_wins(), 1);
}

#[test]
fn scores_accumulate_across_resets() {
    let mut session = Session::new(Mode::TwoPlayer);

    // X wins the top row
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }
    session.reset();

    // Draw game: X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.play(index).unwrap();
    }
    session.reset();

    assert_eq!(session.scores().x_wins(), 1);
    assert_eq!(session.scores().o_wins(), 0);
    assert_eq!(session.scores().draws(), 1);
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Mode::VsComputer).unwrap(),
        "\"vscomputer\""
    );
    assert_eq!(
        serde_json::to_string(&Mode::TwoPlayer).unwrap(),
        "\"twoplayer\""
    );
}

#[test]
fn board_snapshot_round_trips() {
    let mut session = Session::new(Mode::VsComputer);
    session.play(4).unwrap();

    let json = serde_json::to_string(session.game().board()).unwrap();
    let restored: noughts::Board = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, session.game().board());
}
