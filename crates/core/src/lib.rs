//! Core game logic - a pure, deterministic reducer
//!
//! All game rules live in [`reducer::reduce`], a function from
//! `(state, action)` to the next state. It performs no I/O, reads no clock
//! and draws no random numbers, so a recorded action log replays exactly.
//!
//! # Module Structure
//!
//! - [`action`]: the closed set of actions and their JSON wire form
//! - [`board`]: bounds, collision and row clearing over block lists
//! - [`catalog`]: the seven tetromino templates
//! - [`reducer`]: the state transition function
//! - [`rng`]: seeded uniform piece selection for callers that spawn pieces
//! - [`scoring`]: points per landing
//! - [`snapshot`]: grid view of a state for rendering
//! - [`store`]: state container with subscribers
//!
//! # Game Rules
//!
//! - **Board**: 10 columns by 20 rows, y grows downward
//! - **Placement**: a new piece is centered on column 4 at its template rows
//! - **Rotation**: 90° clockwise about the shape center, shifted back on
//!   board if needed, rejected on overlap; the square never rotates
//! - **Landing**: merges the piece, clears full rows, scores
//!   `speed * 10 + speed * 100 * rows` (nothing for the very first piece)
//! - **Hold**: one swap per turn; the held piece goes back to its template
//!
//! # Example
//!
//! ```
//! use tetris_reducer_core::{catalog, reduce, Action};
//! use tetris_reducer_core::types::{GameStatus, PieceKind};
//!
//! let mut state = reduce(None, &Action::game_play());
//! state = reduce(Some(state), &Action::set_active_piece(catalog::template(PieceKind::I)));
//! for _ in 0..25 {
//!     state = reduce(Some(state), &Action::move_active_piece_down());
//! }
//! state = reduce(Some(state), &Action::piece_hit_ground());
//!
//! assert_eq!(state.status(), GameStatus::Playing);
//! assert!(state.active_piece.is_empty());
//! assert!(state.blocks.iter().all(|b| b.y == 19));
//! ```

pub mod action;
pub mod board;
pub mod catalog;
pub mod reducer;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod store;

pub use tetris_reducer_types as types;

pub use action::Action;
pub use reducer::{place, reduce, reduce_json};
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use snapshot::GameSnapshot;
pub use store::{Store, SubscriptionId};
