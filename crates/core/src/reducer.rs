//! Reducer module - the game rules as a pure state transition
//!
//! [`reduce`] takes the current state by value and returns the next one.
//! Each action variant has its own handler; handlers never panic and never
//! report errors. A rejected transition (blocked move, wrong status, swap
//! already used this turn) simply returns the state it was given, so a
//! caller detects rejection by comparing states.
//!
//! # Rules Summary
//!
//! - Movement, rotation and descent only happen while the game is `Playing`.
//! - Descent into an obstruction lands the piece where it is.
//! - Rotation is 90° clockwise about the shape center, shifted back onto the
//!   board as a whole when it pokes out, and rejected on collision.
//! - Landing merges the piece into the board, clears full rows top to bottom
//!   and scores `speed * 10 + speed * 100 * rows`.

use crate::action::Action;
use crate::board::{self, Bounds, MAX_X, MAX_Y};
use crate::catalog;
use crate::scoring::landing_score;
use crate::types::{
    Block, Color, Direction, GameMeta, GameState, GameStatus, HoldingSlot, Piece, SPAWN_CENTER_X,
};

/// Added before flooring rotated coordinates so values such as 3.9999999
/// land on 4.
const ROTATION_EPSILON: f64 = 0.1;

/// Clockwise rotation step in degrees
const ROTATION_DEGREES: f64 = 90.0;

/// Apply `action` to `state`, starting from the default state when `state`
/// is `None`.
///
/// # Examples
///
/// ```
/// use tetris_reducer_core::{catalog, reduce, Action};
/// use tetris_reducer_core::types::PieceKind;
///
/// let state = reduce(None, &Action::game_play());
/// let state = reduce(Some(state), &Action::set_active_piece(catalog::template(PieceKind::J)));
///
/// let xs: Vec<i32> = state.active_piece.blocks.iter().map(|b| b.x).collect();
/// assert_eq!(xs, [3, 4, 5, 5]);
/// ```
pub fn reduce(state: Option<GameState>, action: &Action) -> GameState {
    let state = state.unwrap_or_default();

    match action {
        Action::SetActivePiece { piece } => set_active_piece(state, piece),
        Action::MoveActivePieceDown => move_active_piece_down(state),
        Action::MoveActivePiece { direction } => move_active_piece(state, *direction),
        Action::RotatePiece => rotate_piece(state),
        Action::PieceHitGround => land(state),
        Action::GamePlay => change_status(state, GameStatus::Playing),
        Action::GamePaused => change_status(state, GameStatus::Paused),
        Action::GameOver => game_over(state),
        Action::GameReset => GameState::default(),
        Action::SwapPiece => swap_piece(state),
        Action::IncrementTurn => increment_turn(state),
        Action::AddPieceToWaiting { piece } => add_piece_to_waiting(state, piece),
        Action::RemovePieceFromWaiting => remove_piece_from_waiting(state),
    }
}

/// Decode a JSON action and apply it.
///
/// Unknown action types and malformed payloads leave the state unchanged
/// (the default state when `state` is `None`).
pub fn reduce_json(state: Option<GameState>, json: &str) -> GameState {
    match Action::from_json(json) {
        Ok(Some(action)) => reduce(state, &action),
        Ok(None) | Err(_) => state.unwrap_or_default(),
    }
}

/// Center a piece horizontally on the board, keeping its rows.
///
/// Blocks left of the shape's middle column end up the same distance left
/// of [`SPAWN_CENTER_X`], and likewise on the right. The middle column is
/// `floor((min_x + max_x) / 2)`. An empty piece places as an empty piece;
/// `None` means the shifted coordinates do not fit in an `i32`.
pub fn place(piece: &Piece) -> Option<Piece> {
    let Some(b) = board::bounds(&piece.blocks) else {
        return Some(Piece::empty());
    };
    let middle = (i64::from(b.min_x) + i64::from(b.max_x)).div_euclid(2);
    let offset = i64::from(SPAWN_CENTER_X) - middle;

    piece
        .blocks
        .iter()
        .map(|block| {
            let x = i32::try_from(i64::from(block.x) + offset).ok()?;
            Some(Block { x, ..*block })
        })
        .collect::<Option<_>>()
        .map(|blocks| Piece { blocks })
}

fn set_active_piece(state: GameState, piece: &Piece) -> GameState {
    let Some(active_piece) = place(piece) else {
        return state;
    };
    GameState {
        active_piece,
        ..state
    }
}

/// Translate every block, `None` on coordinate overflow
fn shifted(piece: &Piece, dx: i32, dy: i32) -> Option<Piece> {
    piece
        .blocks
        .iter()
        .map(|b| {
            Some(Block {
                x: b.x.checked_add(dx)?,
                y: b.y.checked_add(dy)?,
                ..*b
            })
        })
        .collect::<Option<_>>()
        .map(|blocks| Piece { blocks })
}

fn move_active_piece_down(state: GameState) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let Some(b) = board::bounds(&state.active_piece.blocks) else {
        return state;
    };
    // Resting on the floor: the caller decides when to land it.
    if b.max_y >= MAX_Y {
        return state;
    }

    let Some(moved) = shifted(&state.active_piece, 0, 1) else {
        return state;
    };
    if board::collides(&moved.blocks, &state.blocks) {
        // Lands at the last position that did not collide.
        return land(state);
    }

    GameState {
        active_piece: moved,
        ..state
    }
}

fn move_active_piece(state: GameState, direction: Option<Direction>) -> GameState {
    if !state.is_playing() {
        return state;
    }
    let Some(direction) = direction else {
        return state;
    };
    let Some(b) = board::bounds(&state.active_piece.blocks) else {
        return state;
    };

    let against_wall = match direction {
        Direction::Left => b.min_x <= 0,
        Direction::Right => b.max_x >= MAX_X,
    };
    if against_wall {
        return state;
    }

    let Some(moved) = shifted(&state.active_piece, direction.dx(), 0) else {
        return state;
    };
    if board::collides(&moved.blocks, &state.blocks) {
        return state;
    }

    GameState {
        active_piece: moved,
        ..state
    }
}

/// Rotation center for a bounding box.
///
/// The x half-span rounds down and the y half-span rounds up, which keeps
/// 3-wide and 2-wide shapes from drifting sideways over a full revolution.
fn rotation_center(b: &Bounds) -> (i64, i64) {
    let x_span = i64::from(b.max_x) - i64::from(b.min_x);
    let y_span = i64::from(b.max_y) - i64::from(b.min_y);

    (
        i64::from(b.min_x) + x_span.div_euclid(2),
        i64::from(b.min_y) + (y_span + 1).div_euclid(2),
    )
}

fn snap(v: f64) -> Option<i32> {
    i32::try_from((v + ROTATION_EPSILON).floor() as i64).ok()
}

/// Rotate a piece 90° clockwise about the center of its bounding box
/// (screen coordinates, y down).
///
/// Returns `None` for an empty piece or when a rotated coordinate does not
/// fit in an `i32`.
pub fn rotate_clockwise(piece: &Piece) -> Option<Piece> {
    let b = board::bounds(&piece.blocks)?;
    let (cx, cy) = rotation_center(&b);
    let (sin, cos) = ROTATION_DEGREES.to_radians().sin_cos();

    piece
        .blocks
        .iter()
        .map(|block| {
            let dx = (i64::from(block.x) - cx) as f64;
            let dy = (i64::from(block.y) - cy) as f64;
            Some(Block {
                x: snap(dx * cos - dy * sin + cx as f64)?,
                y: snap(dx * sin + dy * cos + cy as f64)?,
                ..*block
            })
        })
        .collect::<Option<_>>()
        .map(|blocks| Piece { blocks })
}

fn rotate_piece(state: GameState) -> GameState {
    if !state.is_playing() {
        return state;
    }
    // Squares look the same after any rotation; skipping avoids drift.
    if state.active_piece.color() == Some(Color::Yellow) {
        return state;
    }
    let Some(rotated) = rotate_clockwise(&state.active_piece) else {
        return state;
    };

    // Shift the whole shape back on board, never individual blocks.
    let rotated = match board::bounds(&rotated.blocks) {
        Some(b) => {
            let (dx, dy) = b.correction();
            shifted(&rotated, dx, dy)
        }
        None => Some(rotated),
    };
    let Some(rotated) = rotated else {
        return state;
    };

    if board::collides(&rotated.blocks, &state.blocks) {
        return state;
    }

    GameState {
        active_piece: rotated,
        ..state
    }
}

/// Merge the active piece into the board, clear full rows and score.
///
/// Shared by `PieceHitGround` and by a blocked descent.
fn land(state: GameState) -> GameState {
    // Nothing scores unless a real piece lands on an existing stack.
    let scores = !state.blocks.is_empty() && !state.active_piece.is_empty();

    let mut merged = state.blocks;
    merged.extend(state.active_piece.blocks.iter().copied());

    let rows = board::full_rows(&merged);
    let blocks = board::clear_rows(merged, &rows);

    let score = if scores {
        state
            .score
            .saturating_add(landing_score(state.game.gravity_speed, rows.len()))
    } else {
        state.score
    };

    GameState {
        active_piece: Piece::empty(),
        blocks,
        score,
        ..state
    }
}

/// `Playing` and `Paused` are unreachable once the game is over.
fn change_status(state: GameState, status: GameStatus) -> GameState {
    if state.game.status == GameStatus::GameOver {
        return state;
    }
    GameState {
        game: GameMeta {
            status,
            ..state.game
        },
        ..state
    }
}

fn game_over(state: GameState) -> GameState {
    GameState {
        game: GameMeta {
            status: GameStatus::GameOver,
            ..state.game
        },
        ..state
    }
}

fn increment_turn(state: GameState) -> GameState {
    GameState {
        game: GameMeta {
            turn: state.game.turn.saturating_add(1),
            ..state.game
        },
        ..state
    }
}

fn swap_piece(state: GameState) -> GameState {
    // One swap per turn.
    if state.holding.turn == Some(state.game.turn) {
        return state;
    }
    let Some(color) = state.active_piece.color() else {
        return state;
    };

    let held = catalog::template_for_color(color);
    let holding = Piece {
        blocks: state.holding.blocks.clone(),
    };
    let Some(active_piece) = place(&holding) else {
        return state;
    };
    let holding = HoldingSlot {
        blocks: held.blocks,
        turn: Some(state.game.turn),
    };

    GameState {
        active_piece,
        holding,
        ..state
    }
}

fn add_piece_to_waiting(mut state: GameState, piece: &Piece) -> GameState {
    // A full queue drops the newcomer.
    let _ = state.next_pieces.try_push(piece.clone());
    state
}

fn remove_piece_from_waiting(mut state: GameState) -> GameState {
    let _ = state.next_pieces.pop_at(0);
    state
}
