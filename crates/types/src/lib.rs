//! Core types module - shared data structures and constants
//!
//! This module defines the state value the reducer consumes and produces.
//! Every type here is plain data: cloning a [`GameState`] gives an
//! independent value, and nothing in this crate mutates state on its own.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, y grows downward)
//! - **Spawn column**: pieces are centered on column 4
//!
//! # Serialized Form
//!
//! All state types serialize with `serde` using the field names a renderer
//! expects (`activePiece`, `nextPieces`, `gravitySpeed`, ...). Colors are
//! lowercase names and statuses are `SCREAMING_SNAKE_CASE`.
//!
//! # Examples
//!
//! ```
//! use tetris_reducer_types::{Color, GameState, GameStatus, PieceKind, BOARD_WIDTH};
//!
//! let state = GameState::default();
//! assert_eq!(state.game.status, GameStatus::NotStarted);
//! assert_eq!(state.game.gravity_speed, 1);
//! assert!(state.active_piece.is_empty());
//!
//! assert_eq!(PieceKind::from_str("j"), Some(PieceKind::J));
//! assert_eq!(PieceKind::J.color(), Color::Blue);
//! assert_eq!(Color::Blue.kind(), PieceKind::J);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Column a freshly placed piece is centered on
pub const SPAWN_CENTER_X: i32 = 4;

/// Number of blocks in a tetromino
pub const PIECE_BLOCKS: usize = 4;

/// Maximum length of the waiting queue
pub const NEXT_QUEUE_CAPACITY: usize = 3;

/// Gravity speed of a fresh game
pub const DEFAULT_GRAVITY_SPEED: u32 = 1;

/// Block colors, one per tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Lime,
    Purple,
    Red,
}

impl Color {
    /// The piece kind that is drawn in this color
    pub fn kind(self) -> PieceKind {
        match self {
            Color::Cyan => PieceKind::I,
            Color::Blue => PieceKind::J,
            Color::Orange => PieceKind::L,
            Color::Yellow => PieceKind::O,
            Color::Lime => PieceKind::S,
            Color::Purple => PieceKind::T,
            Color::Red => PieceKind::Z,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Lime => "lime",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Lime
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reducer_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Fixed color of this kind
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Lime,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// A single cell, either settled on the board or part of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Block {
    pub const fn new(color: Color, x: i32, y: i32) -> Self {
        Self { color, x, y }
    }

    /// Board position as an `(x, y)` key
    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// A tetromino: up to four blocks, empty when there is no piece.
///
/// Block order is stable across every transform, so index `i` of a rotated
/// or shifted piece is the same cell as index `i` before the transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub blocks: ArrayVec<Block, PIECE_BLOCKS>,
}

impl Piece {
    pub fn new(blocks: [Block; PIECE_BLOCKS]) -> Self {
        Self {
            blocks: ArrayVec::from(blocks),
        }
    }

    /// A piece with no blocks
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a slice, `None` if it holds more than four blocks
    pub fn from_slice(blocks: &[Block]) -> Option<Self> {
        let mut out = ArrayVec::new();
        out.try_extend_from_slice(blocks).ok()?;
        Some(Self { blocks: out })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Color of the first block
    pub fn color(&self) -> Option<Color> {
        self.blocks.first().map(|b| b.color)
    }

    /// Kind inferred from the piece color
    pub fn kind(&self) -> Option<PieceKind> {
        self.color().map(Color::kind)
    }
}

/// The piece set aside by a swap, and the turn it was stored on
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoldingSlot {
    pub blocks: ArrayVec<Block, PIECE_BLOCKS>,
    /// `None` until the first swap
    pub turn: Option<u32>,
}

impl HoldingSlot {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Game lifecycle status
///
/// `NotStarted -> Playing <-> Paused`, and `Playing | Paused -> GameOver`.
/// `GameOver` is terminal until a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "NOT_STARTED",
            GameStatus::Playing => "PLAYING",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "GAME_OVER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMeta {
    pub status: GameStatus,
    pub turn: u32,
    pub gravity_speed: u32,
}

impl Default for GameMeta {
    fn default() -> Self {
        Self {
            status: GameStatus::NotStarted,
            turn: 0,
            gravity_speed: DEFAULT_GRAVITY_SPEED,
        }
    }
}

/// Complete game state
///
/// The reducer never edits a state in place that the caller can still
/// observe: it takes a value and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub active_piece: Piece,
    /// Settled board cells
    pub blocks: Vec<Block>,
    pub holding: HoldingSlot,
    pub next_pieces: ArrayVec<Piece, NEXT_QUEUE_CAPACITY>,
    pub game: GameMeta,
    pub score: u32,
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    pub fn is_playing(&self) -> bool {
        self.game.status == GameStatus::Playing
    }
}

/// Lateral movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta of one step
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_and_kind_are_inverse() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.color().kind(), kind);
        }
    }

    #[test]
    fn default_state_matches_fresh_game() {
        let state = GameState::default();

        assert_eq!(state.game.status, GameStatus::NotStarted);
        assert_eq!(state.game.turn, 0);
        assert_eq!(state.game.gravity_speed, 1);
        assert_eq!(state.score, 0);
        assert!(state.blocks.is_empty());
        assert!(state.active_piece.is_empty());
        assert!(state.holding.is_empty());
        assert_eq!(state.holding.turn, None);
        assert!(state.next_pieces.is_empty());
    }

    #[test]
    fn state_serializes_with_renderer_field_names() {
        let mut state = GameState::default();
        state
            .active_piece
            .blocks
            .push(Block::new(Color::Blue, 3, 0));

        let v = serde_json::to_value(&state).unwrap();
        assert_eq!(v["activePiece"]["blocks"][0]["color"], "blue");
        assert_eq!(v["game"]["status"], "NOT_STARTED");
        assert_eq!(v["game"]["gravitySpeed"], 1);
        assert!(v["holding"]["turn"].is_null());
        assert!(v["nextPieces"].as_array().unwrap().is_empty());
    }

    #[test]
    fn piece_from_slice_rejects_more_than_four_blocks() {
        let b = Block::new(Color::Red, 0, 0);
        assert!(Piece::from_slice(&[b; 4]).is_some());
        assert!(Piece::from_slice(&[b; 5]).is_none());
        assert_eq!(Piece::from_slice(&[]).unwrap(), Piece::empty());
    }

    #[test]
    fn oversized_piece_fails_to_deserialize() {
        let json = r#"{"blocks":[
            {"color":"red","x":0,"y":0},{"color":"red","x":1,"y":0},
            {"color":"red","x":2,"y":0},{"color":"red","x":3,"y":0},
            {"color":"red","x":4,"y":0}]}"#;
        assert!(serde_json::from_str::<Piece>(json).is_err());
    }
}
