//! Integration tests for the async player and orchestration layer.

use noughts::{
    ComputerPlayer, GameEvent, GameStatus, HumanPlayer, Mark, Mode, Orchestrator, Position,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn instant_computer(name: &str, mark: Mark) -> Box<ComputerPlayer> {
    Box::new(ComputerPlayer::new(name, mark).with_delay(Duration::ZERO))
}

#[tokio::test]
async fn optimal_self_play_reaches_a_draw() {
    init_tracing();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(
        Mode::TwoPlayer,
        instant_computer("Optimal X", Mark::X),
        instant_computer("Optimal O", Mark::O),
        event_tx,
    );

    timeout(Duration::from_secs(30), orchestrator.run())
        .await
        .expect("game loop should finish")
        .unwrap();

    let mut moves_made = 0;
    let mut last_status = None;
    while let Ok(event) = event_rx.try_recv() {
        match event {
            GameEvent::MoveMade { .. } => moves_made += 1,
            GameEvent::GameOver { status } => last_status = Some(status),
            GameEvent::ComputerThinking => panic!("no thinking events in two-player mode"),
            GameEvent::StateChanged { .. } => {}
        }
    }

    assert_eq!(moves_made, 9);
    assert_eq!(last_status, Some(GameStatus::Draw));
    assert_eq!(orchestrator.session().scores().draws(), 1);
}

#[tokio::test]
async fn computer_reply_is_announced_then_applied() {
    init_tracing();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(
        Mode::VsComputer,
        Box::new(HumanPlayer::new("You", input_rx)),
        instant_computer("Computer", Mark::O),
        event_tx,
    );
    let handle = tokio::spawn(async move { orchestrator.run().await });

    // Human takes the center; the computer replies with the first corner
    input_tx.send(4).unwrap();

    let mut events = Vec::new();
    while events.len() < 6 {
        let event = timeout(Duration::from_secs(10), event_rx.recv())
            .await
            .expect("event should arrive")
            .expect("event channel open");
        events.push(event);
    }

    assert!(matches!(
        &events[0],
        GameEvent::StateChanged { prompt, .. } if prompt == "Your turn (X)"
    ));
    assert!(matches!(
        &events[1],
        GameEvent::MoveMade { player, mov }
            if player == "You" && mov.position() == Position::Center
    ));
    assert!(matches!(
        &events[2],
        GameEvent::StateChanged { prompt, .. } if prompt == "Computer's turn (O)"
    ));
    assert!(matches!(events[3], GameEvent::ComputerThinking));
    assert!(matches!(
        &events[4],
        GameEvent::MoveMade { player, mov }
            if player == "Computer" && mov.position() == Position::TopLeft
    ));
    assert!(matches!(
        &events[5],
        GameEvent::StateChanged { prompt, .. } if prompt == "Your turn (X)"
    ));

    handle.abort();
}

#[tokio::test]
async fn occupied_input_is_dropped_and_the_turn_stays() {
    init_tracing();
    let (x_tx, x_rx) = mpsc::unbounded_channel();
    let (o_tx, o_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(
        Mode::TwoPlayer,
        Box::new(HumanPlayer::new("Alice", x_rx)),
        Box::new(HumanPlayer::new("Bob", o_rx)),
        event_tx,
    );
    let handle = tokio::spawn(async move { orchestrator.run().await });

    x_tx.send(4).unwrap();
    // Bob clicks the center Alice already holds, then picks a corner
    o_tx.send(4).unwrap();
    o_tx.send(0).unwrap();

    let mut moves = Vec::new();
    while moves.len() < 2 {
        let event = timeout(Duration::from_secs(10), event_rx.recv())
            .await
            .expect("event should arrive")
            .expect("event channel open");
        if let GameEvent::MoveMade { player, mov } = event {
            moves.push((player, mov.position()));
        }
    }

    assert_eq!(moves[0], ("Alice".to_string(), Position::Center));
    assert_eq!(moves[1], ("Bob".to_string(), Position::TopLeft));

    handle.abort();
}
