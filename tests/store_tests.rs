//! Store behavior seen from outside the crate

use std::sync::{Arc, Mutex};

use tetris_reducer::core::{catalog, Action, GameSnapshot, Store};
use tetris_reducer::types::{GameState, GameStatus, PieceKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_subscribers_see_every_state() {
    init_tracing();
    let mut store = Store::new(None);
    let seen: Arc<Mutex<Vec<GameStatus>>> = Arc::default();
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().unwrap().push(state.status()));

    store.dispatch(Action::game_play());
    store.dispatch(Action::game_paused());
    store.dispatch(Action::game_over());
    store.dispatch(Action::game_play());

    assert_eq!(
        *seen.lock().unwrap(),
        [
            GameStatus::Playing,
            GameStatus::Paused,
            GameStatus::GameOver,
            GameStatus::GameOver,
        ]
    );
}

#[test]
fn test_store_starts_from_given_state() {
    let mut initial = GameState::default();
    initial.score = 77;
    let store = Store::new(Some(initial.clone()));
    assert_eq!(store.state(), &initial);
}

#[test]
fn test_subscriber_snapshot_matches_state() {
    init_tracing();
    let mut store = Store::default();
    let last: Arc<Mutex<Option<GameSnapshot>>> = Arc::default();
    let sink = Arc::clone(&last);
    store.subscribe(move |state| *sink.lock().unwrap() = Some(GameSnapshot::from_state(state)));

    store.dispatch(Action::game_play());
    store.dispatch(Action::set_active_piece(catalog::template(PieceKind::Z)));

    let snap = last.lock().unwrap().clone().unwrap();
    assert_eq!(snap, GameSnapshot::from_state(store.state()));
    assert_eq!(snap.filled_cells(), 4);
}

#[test]
fn test_wire_actions_round_through_store() {
    init_tracing();
    let mut store = Store::default();
    let actions = [
        Action::game_play(),
        Action::add_piece_to_waiting(catalog::template(PieceKind::T)),
        Action::set_active_piece(catalog::template(PieceKind::S)),
        Action::move_active_piece_down(),
        Action::rotate_piece(),
    ];

    let mut direct = Store::default();
    for action in &actions {
        store.dispatch_json(&action.to_json().unwrap());
        direct.dispatch(action.clone());
    }

    assert_eq!(store.state(), direct.state());
}

#[test]
fn test_malformed_wire_action_keeps_state() {
    init_tracing();
    let mut store = Store::default();
    store.dispatch(Action::game_play());
    let before = store.state().clone();

    store.dispatch_json(r#"{"type":"MOVE_ACTIVE_PIECE","direction":7}"#);
    store.dispatch_json(r#"{"type":"NOT_AN_ACTION"}"#);
    store.dispatch_json("");

    assert_eq!(store.state(), &before);
}
