//! Action module - every intent the reducer understands
//!
//! Actions are a closed enum, so the reducer's `match` is checked for
//! coverage at compile time. The JSON form is `{"type": "...", ...payload}`
//! with the tag in `SCREAMING_SNAKE_CASE`:
//!
//! ```
//! use tetris_reducer_core::action::Action;
//! use tetris_reducer_core::types::Direction;
//!
//! let action = Action::from_json(r#"{"type":"MOVE_ACTIVE_PIECE","direction":"left"}"#)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(action, Action::move_active_piece(Some(Direction::Left)));
//!
//! // Unknown tags decode to `None` and are ignored by the reducer.
//! assert_eq!(Action::from_json(r#"{"type":"INIT"}"#).unwrap(), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Piece};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Center a piece on the board and make it the active piece
    SetActivePiece { piece: Piece },
    /// Gravity step; lands the piece when the way down is blocked
    MoveActivePieceDown,
    /// One column left or right; `None` does nothing
    MoveActivePiece {
        #[serde(default)]
        direction: Option<Direction>,
    },
    /// 90° clockwise about the piece center
    RotatePiece,
    /// Merge the active piece into the board and clear full rows
    PieceHitGround,
    GamePlay,
    GamePaused,
    GameOver,
    /// Back to the default state
    GameReset,
    /// Exchange the active piece with the held one (once per turn)
    SwapPiece,
    IncrementTurn,
    AddPieceToWaiting { piece: Piece },
    RemovePieceFromWaiting,
}

impl Action {
    /// Every wire tag, in declaration order
    pub const TYPE_NAMES: [&'static str; 13] = [
        "SET_ACTIVE_PIECE",
        "MOVE_ACTIVE_PIECE_DOWN",
        "MOVE_ACTIVE_PIECE",
        "ROTATE_PIECE",
        "PIECE_HIT_GROUND",
        "GAME_PLAY",
        "GAME_PAUSED",
        "GAME_OVER",
        "GAME_RESET",
        "SWAP_PIECE",
        "INCREMENT_TURN",
        "ADD_PIECE_TO_WAITING",
        "REMOVE_PIECE_FROM_WAITING",
    ];

    pub fn set_active_piece(piece: Piece) -> Self {
        Action::SetActivePiece { piece }
    }

    pub fn move_active_piece_down() -> Self {
        Action::MoveActivePieceDown
    }

    pub fn move_active_piece(direction: Option<Direction>) -> Self {
        Action::MoveActivePiece { direction }
    }

    pub fn rotate_piece() -> Self {
        Action::RotatePiece
    }

    pub fn piece_hit_ground() -> Self {
        Action::PieceHitGround
    }

    pub fn game_play() -> Self {
        Action::GamePlay
    }

    pub fn game_paused() -> Self {
        Action::GamePaused
    }

    pub fn game_over() -> Self {
        Action::GameOver
    }

    pub fn game_reset() -> Self {
        Action::GameReset
    }

    pub fn swap_piece() -> Self {
        Action::SwapPiece
    }

    pub fn increment_turn() -> Self {
        Action::IncrementTurn
    }

    pub fn add_piece_to_waiting(piece: Piece) -> Self {
        Action::AddPieceToWaiting { piece }
    }

    pub fn remove_piece_from_waiting() -> Self {
        Action::RemovePieceFromWaiting
    }

    /// Wire tag of this action
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::SetActivePiece { .. } => "SET_ACTIVE_PIECE",
            Action::MoveActivePieceDown => "MOVE_ACTIVE_PIECE_DOWN",
            Action::MoveActivePiece { .. } => "MOVE_ACTIVE_PIECE",
            Action::RotatePiece => "ROTATE_PIECE",
            Action::PieceHitGround => "PIECE_HIT_GROUND",
            Action::GamePlay => "GAME_PLAY",
            Action::GamePaused => "GAME_PAUSED",
            Action::GameOver => "GAME_OVER",
            Action::GameReset => "GAME_RESET",
            Action::SwapPiece => "SWAP_PIECE",
            Action::IncrementTurn => "INCREMENT_TURN",
            Action::AddPieceToWaiting { .. } => "ADD_PIECE_TO_WAITING",
            Action::RemovePieceFromWaiting => "REMOVE_PIECE_FROM_WAITING",
        }
    }

    /// Decode the JSON form of an action.
    ///
    /// - `Ok(Some(action))`: known tag with a well-formed payload
    /// - `Ok(None)`: a JSON object whose `type` is missing or unknown
    /// - `Err(_)`: not a JSON object, or a known tag with a bad payload
    pub fn from_json(json: &str) -> Result<Option<Action>, serde_json::Error> {
        match serde_json::from_str::<Action>(json) {
            Ok(action) => Ok(Some(action)),
            Err(e) => {
                // Unknown action type is not a decode error.
                #[derive(Debug, Deserialize)]
                struct TypeOnly {
                    #[serde(rename = "type")]
                    action_type: Option<String>,
                }
                let action_type = serde_json::from_str::<TypeOnly>(json)?.action_type;
                match action_type {
                    Some(t) if Self::TYPE_NAMES.contains(&t.as_str()) => Err(e),
                    _ => Ok(None),
                }
            }
        }
    }

    /// Encode as `{"type": "...", ...payload}`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
