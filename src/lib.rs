//! Tetris reducer (workspace facade crate).
//!
//! Re-exports the member crates under short names so callers can write
//! `tetris_reducer::core::reduce` while the implementation lives in
//! dedicated crates under `crates/`.

pub use tetris_reducer_core as core;
pub use tetris_reducer_engine as engine;
pub use tetris_reducer_types as types;
