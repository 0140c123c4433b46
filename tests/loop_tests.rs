//! Loop driver tests: `run` against the scripted headless frontend.
//!
//! These exercise the real driver with the real clock, so boards and
//! delays are kept small to finish in a handful of frames.

use std::time::Duration;

use concentration::{
    run, Board, Card, DrawCmd, GameConfig, GameStatus, HeadlessFrontend, InputEvent, Layout,
    PairValue, Session,
};

fn session_with_values(config: GameConfig, values: &[u16]) -> Session {
    let layout = Layout::from_config(&config);
    let cards = values
        .iter()
        .enumerate()
        .map(|(index, &value)| Card::new(PairValue::new(value), index, layout.cell_rect(index)))
        .collect();
    Session::with_board(config, Board::from_cards(cards))
}

fn click(session: &Session, index: usize) -> InputEvent {
    InputEvent::PointerReleased(session.board().card(index).rect.center())
}

#[test]
fn run_solves_a_single_pair_and_quits_on_script_end() {
    let config = GameConfig::default().with_pair_count(1);
    let mut session = session_with_values(config, &[0, 0]);
    let mut frontend = HeadlessFrontend::new();

    frontend.push_frame(&[click(&session, 0)]);
    frontend.push_frame(&[click(&session, 1)]);
    frontend.push_frame(&[]);

    run(&mut session, &mut frontend).unwrap();

    assert_eq!(session.status(), GameStatus::Solved);
    // One scene per scripted frame; the quit frame presents nothing.
    assert_eq!(frontend.frames_presented(), 3);

    let last = frontend.scenes.last().unwrap();
    assert!(last
        .cmds
        .iter()
        .any(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "YOU WIN")));
}

#[test]
fn run_reverts_a_mismatch_on_the_wall_clock() {
    // Short delay so a few 60 fps frames are enough to pass the deadline.
    let config = GameConfig::default()
        .with_pair_count(2)
        .with_flip_back_delay(Duration::from_millis(20));
    let mut session = session_with_values(config, &[0, 1, 0, 1]);
    let mut frontend = HeadlessFrontend::new();

    frontend.push_frame(&[click(&session, 0)]);
    frontend.push_frame(&[click(&session, 1)]);
    for _ in 0..6 {
        frontend.push_frame(&[]);
    }

    run(&mut session, &mut frontend).unwrap();

    assert_eq!(session.status(), GameStatus::InProgress);
    for index in 0..4 {
        assert!(!session.board().card(index).is_revealed());
        assert!(!session.board().card(index).is_matched());
    }
}

#[test]
fn run_stops_on_explicit_quit_mid_game() {
    let config = GameConfig::default().with_pair_count(2);
    let mut session = session_with_values(config, &[0, 1, 0, 1]);
    let mut frontend = HeadlessFrontend::new();

    frontend.push_frame(&[click(&session, 0)]);
    frontend.push_frame(&[InputEvent::Quit]);
    // Never reached.
    frontend.push_frame(&[click(&session, 2)]);

    run(&mut session, &mut frontend).unwrap();

    assert_eq!(frontend.frames_presented(), 1);
    assert!(session.board().card(0).is_revealed());
    assert!(!session.board().card(2).is_revealed());
}

#[test]
fn presented_scenes_track_card_state() {
    let config = GameConfig::default().with_pair_count(1);
    let mut session = session_with_values(config, &[5, 5]);
    let mut frontend = HeadlessFrontend::new();

    frontend.push_frame(&[]);
    frontend.push_frame(&[click(&session, 0)]);

    run(&mut session, &mut frontend).unwrap();

    let value_text = |scene: &concentration::Scene| {
        scene
            .cmds
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "5"))
            .count()
    };

    // All hidden in the first frame, one value showing in the second.
    assert_eq!(value_text(&frontend.scenes[0]), 0);
    assert_eq!(value_text(&frontend.scenes[1]), 1);
}
