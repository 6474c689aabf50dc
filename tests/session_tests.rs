//! Integration tests for the stacking session driven by elapsed time

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tower_stack::core::{GameConfig, GameSession};
use tower_stack::input::{command_for_key, CommandLatch};
use tower_stack::types::{GameCommand, INITIAL_SPEED, PREVIEW_DEPTH, SPEED_INCREMENT};

fn started() -> GameSession {
    let mut session = GameSession::new(GameConfig::default());
    session.start().unwrap();
    session
}

#[test]
fn test_game_lifecycle() {
    let mut session = GameSession::new(GameConfig::default());
    assert!(!session.started());
    assert!(session.current_block().is_none());

    session.start().unwrap();
    assert!(session.started());
    assert!(!session.game_over());
    assert!(!session.paused());
    assert_eq!(session.game_id(), 1);
    assert_eq!(session.tower_height(), 1);

    let current = session.current_block().unwrap();
    assert_eq!(current.x, 0.0);
    assert_eq!(current.y, 470.0);
    assert!(current.is_moving);
}

#[test]
fn test_perfect_drop_after_two_seconds() {
    let mut session = started();

    // 150 units/s for 2s lands exactly on the base block at x=300.
    assert!(session.update(2.0, Some(GameCommand::Drop)).unwrap());

    assert_eq!(session.score(), 60);
    assert_eq!(session.consecutive_perfects(), 1);
    assert_eq!(session.display_height(), 1);

    let top = session.tower().top().unwrap();
    assert_eq!(top.x, 300.0);
    assert_eq!(top.width, 200.0);
    assert!(!top.is_moving);

    let next = session.current_block().unwrap();
    assert_eq!(next.x, 0.0);
    assert_eq!(next.y, 440.0);

    let event = session.take_last_event().unwrap();
    assert!(event.stacked);
    assert!(event.perfect);
    assert_eq!(event.points, 60);
    assert!(session.take_last_event().is_none());
}

#[test]
fn test_partial_drop_trims_to_overlap() {
    let mut session = started();

    session.update(3.0, Some(GameCommand::Drop)).unwrap();

    let top = session.tower().top().unwrap();
    assert_eq!(top.x, 450.0);
    assert_eq!(top.width, 50.0);
    // 10 + floor(10 * 50 / 200)
    assert_eq!(session.score(), 12);
    assert_eq!(session.consecutive_perfects(), 0);
    assert!(!session.game_over());
}

#[test]
fn test_clean_miss_ends_game_and_records_history() {
    let mut session = started();

    session.update(3.5, Some(GameCommand::Drop)).unwrap();

    assert!(session.game_over());
    assert!(session.current_block().is_none());
    assert_eq!(session.tower_height(), 1);
    assert_eq!(session.history().count(), 1);
    assert_eq!(session.history().best_score(), 0);

    let event = session.take_last_event().unwrap();
    assert!(!event.stacked);
    assert_eq!(event.points, 0);
}

#[test]
fn test_game_over_only_honors_restart() {
    let mut session = started();
    session.update(3.5, Some(GameCommand::Drop)).unwrap();

    assert!(!session.update(1.0, Some(GameCommand::Drop)).unwrap());
    assert!(!session.update(1.0, Some(GameCommand::TogglePause)).unwrap());
    assert!(!session.paused());
    assert!(session.game_over());

    assert!(session.apply_command(GameCommand::Restart).unwrap());
    assert!(!session.game_over());
    assert_eq!(session.game_id(), 2);
}

#[test]
fn test_history_survives_restarts() {
    let mut session = started();

    // Game 1: one perfect drop, then a miss.
    session.update(2.0, Some(GameCommand::Drop)).unwrap();
    session.update(3.5, Some(GameCommand::Drop)).unwrap();
    assert!(session.game_over());

    session.apply_command(GameCommand::Restart).unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.tower_height(), 1);
    assert_eq!(session.block_speed(), INITIAL_SPEED);

    // Game 2: immediate miss.
    session.update(3.5, Some(GameCommand::Drop)).unwrap();

    let history = session.history();
    assert_eq!(history.count(), 2);
    assert_eq!(history.best_score(), 60);
    assert_eq!(history.best_height(), 1);

    let report = history.top_scores_report(5);
    assert_eq!(
        report,
        "Top 2 Scores:\n1. Score: 60 (Height: 1)\n2. Score: 0 (Height: 0)\n"
    );
}

#[test]
fn test_speed_ramps_at_fifth_block() {
    let mut session = started();

    for _ in 0..3 {
        session.update(2.0, Some(GameCommand::Drop)).unwrap();
        assert_eq!(session.block_speed(), INITIAL_SPEED);
    }

    session.update(2.0, Some(GameCommand::Drop)).unwrap();
    assert_eq!(session.tower_height(), 5);
    assert_eq!(session.block_speed(), INITIAL_SPEED + SPEED_INCREMENT);
    assert_eq!(session.current_block().unwrap().speed, INITIAL_SPEED + SPEED_INCREMENT);

    // Four perfects in a row: 60 + 70 + 80 + 90
    assert_eq!(session.score(), 300);
    assert_eq!(session.consecutive_perfects(), 4);
}

#[test]
fn test_queue_depth_stays_constant() {
    let mut session = started();
    assert_eq!(session.pending().len(), PREVIEW_DEPTH);

    for _ in 0..4 {
        session.update(2.0, Some(GameCommand::Drop)).unwrap();
        assert_eq!(session.pending().len(), PREVIEW_DEPTH);
        assert_eq!(session.preview().len(), PREVIEW_DEPTH);
    }
}

#[test]
fn test_pause_freezes_block() {
    let mut session = started();

    session.apply_command(GameCommand::TogglePause).unwrap();
    assert!(session.paused());

    assert!(!session.update(1.0, Some(GameCommand::Drop)).unwrap());
    assert_eq!(session.current_block().unwrap().x, 0.0);
    assert_eq!(session.tower_height(), 1);

    session.apply_command(GameCommand::TogglePause).unwrap();
    session.update(1.0, None).unwrap();
    assert_eq!(session.current_block().unwrap().x, 150.0);
}

#[test]
fn test_key_presses_reach_session_one_per_tick() {
    let mut session = started();
    let mut latch = CommandLatch::new();

    for code in [KeyCode::Char('p'), KeyCode::Char('p')] {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        latch.press(command_for_key(key).unwrap());
    }

    // Duplicate presses within one tick coalesce.
    session.update(0.5, latch.next_command()).unwrap();
    assert!(session.paused());
    assert!(latch.next_command().is_none());

    latch.press(command_for_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)).unwrap());
    latch.press(command_for_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)).unwrap());

    session.update(2.0, latch.next_command()).unwrap();
    assert!(!session.paused());
    assert_eq!(session.tower_height(), 1);

    // Block was at 300 after the unpaused tick; the drop lands with it there.
    session.update(0.0, latch.next_command()).unwrap();
    assert_eq!(session.tower_height(), 2);
    assert_eq!(session.score(), 60);
}
