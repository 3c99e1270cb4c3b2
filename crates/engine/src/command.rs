//! Player commands and the reasons they can be refused

use std::fmt;

/// A player intent, translated by the driver into one or more actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// One gravity step right now
    SoftDrop,
    Rotate,
    Hold,
    TogglePause,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    NotPlaying,
    Blocked,
    HoldUnavailable,
}

impl CommandError {
    pub fn code(self) -> &'static str {
        match self {
            CommandError::NotPlaying => "not_playing",
            CommandError::Blocked => "blocked",
            CommandError::HoldUnavailable => "hold_unavailable",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CommandError::NotPlaying => "game is not being played",
            CommandError::Blocked => "piece could not move there",
            CommandError::HoldUnavailable => "hold requested when unavailable",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for CommandError {}
