//! Property tests for invariants that must hold for any action sequence
//!
//! - Settled blocks stay on the board, never share a cell and never leave a
//!   full row behind.
//! - While playing, the active piece is on the board and clear of the stack.
//! - Score never decreases; the waiting queue never exceeds three pieces.
//! - Outside `Playing`, movement, rotation and descent change nothing.

use std::collections::HashSet;

use proptest::prelude::*;
use tetris_reducer::core::board;
use tetris_reducer::core::{catalog, reduce, Action};
use tetris_reducer::engine::{Command, Driver, DriverConfig};
use tetris_reducer::types::{Direction, GameState, GameStatus, PieceKind, NEXT_QUEUE_CAPACITY};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::MoveLeft),
        4 => Just(Command::MoveRight),
        4 => Just(Command::Rotate),
        6 => Just(Command::SoftDrop),
        1 => Just(Command::Hold),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn movement_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::move_active_piece_down()),
        Just(Action::move_active_piece(Some(Direction::Left))),
        Just(Action::move_active_piece(Some(Direction::Right))),
        Just(Action::rotate_piece()),
    ]
}

fn assert_board_invariants(state: &GameState) {
    let mut cells = HashSet::new();
    for block in &state.blocks {
        assert!(board::is_in_bounds(block.x, block.y), "{block:?} off board");
        assert!(cells.insert(block.pos()), "{block:?} overlaps");
    }
    assert!(board::full_rows(&state.blocks).is_empty());
    assert!(state.next_pieces.len() <= NEXT_QUEUE_CAPACITY);

    if state.status() == GameStatus::Playing {
        for block in &state.active_piece.blocks {
            assert!(board::is_in_bounds(block.x, block.y), "{block:?} active off board");
        }
        assert!(!board::collides(&state.active_piece.blocks, &state.blocks));
    }
}

proptest! {
    #[test]
    fn driven_games_keep_board_invariants(
        seed in any::<u32>(),
        commands in prop::collection::vec(command_strategy(), 1..300),
    ) {
        let mut driver = Driver::new(DriverConfig { seed, gravity_interval_ms: 1000 });
        driver.start();

        let mut last_score = 0;
        for command in commands {
            let _ = driver.apply(command);
            let state = driver.state();
            assert_board_invariants(state);
            prop_assert!(state.score >= last_score);
            last_score = state.score;
        }
    }

    #[test]
    fn movement_is_ignored_unless_playing(
        kind in kind_strategy(),
        paused in any::<bool>(),
        actions in prop::collection::vec(movement_strategy(), 1..40),
    ) {
        let mut state = reduce(None, &Action::set_active_piece(catalog::template(kind)));
        if paused {
            state = reduce(Some(state), &Action::game_paused());
        }
        let frozen = state.clone();

        for action in &actions {
            state = reduce(Some(state), action);
        }
        prop_assert_eq!(state, frozen);
    }

    #[test]
    fn placement_centers_on_spawn_column(kind in kind_strategy()) {
        let state = reduce(None, &Action::set_active_piece(catalog::template(kind)));
        let b = board::bounds(&state.active_piece.blocks).unwrap();
        prop_assert_eq!((b.min_x + b.max_x).div_euclid(2), 4);
        prop_assert_eq!(b.min_y, 0);
    }

    #[test]
    fn rotation_keeps_piece_on_board(
        kind in kind_strategy(),
        moves in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let mut state = reduce(None, &Action::game_play());
        state = reduce(Some(state), &Action::set_active_piece(catalog::template(kind)));

        for action in &moves {
            state = reduce(Some(state), action);
            prop_assert_eq!(state.active_piece.len(), 4);
            for block in &state.active_piece.blocks {
                prop_assert!(board::is_in_bounds(block.x, block.y));
                prop_assert_eq!(block.color, kind.color());
            }
        }
    }

    #[test]
    fn reducer_is_deterministic(
        kind in kind_strategy(),
        moves in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let run = || {
            let mut state = reduce(None, &Action::game_play());
            state = reduce(Some(state), &Action::set_active_piece(catalog::template(kind)));
            for action in &moves {
                state = reduce(Some(state), action);
            }
            state
        };
        prop_assert_eq!(run(), run());
    }
}
