//! Snapshot module - a read-only grid view of the state for rendering
//!
//! The state keeps settled blocks as a list; renderers want a grid. A
//! snapshot paints settled blocks first and the active piece on top.

use std::fmt;

use crate::board;
use crate::types::{Color, GameState, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// `board[y][x]`, row 0 at the top
    pub board: [[Option<Color>; W]; H],
    pub next: Vec<PieceKind>,
    pub hold: Option<PieceKind>,
    pub score: u32,
    pub status: GameStatus,
    pub turn: u32,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let mut grid = [[None; W]; H];
        let cells = state.blocks.iter().chain(state.active_piece.blocks.iter());
        for block in cells {
            if board::is_in_bounds(block.x, block.y) {
                grid[block.y as usize][block.x as usize] = Some(block.color);
            }
        }

        let hold = state.holding.blocks.first().map(|b| b.color.kind());

        Self {
            board: grid,
            next: state.next_pieces.iter().filter_map(|p| p.kind()).collect(),
            hold,
            score: state.score,
            status: state.game.status,
            turn: state.game.turn,
        }
    }

    /// Colored cells of row `y` as `(color, x)`, left to right.
    /// Out-of-range rows are empty.
    pub fn row(&self, y: i32) -> Vec<(Color, i32)> {
        let Some(cells) = usize::try_from(y).ok().and_then(|y| self.board.get(y)) else {
            return Vec::new();
        };
        cells
            .iter()
            .zip(0..)
            .filter_map(|(cell, x)| cell.map(|c| (c, x)))
            .collect()
    }

    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for cell in row {
                f.write_str(if cell.is_some() { "[x]" } else { "[ ]" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::catalog;
    use crate::reducer::reduce;
    use crate::types::Block;

    #[test]
    fn test_empty_state() {
        let snap = GameSnapshot::from_state(&GameState::default());
        assert_eq!(snap.filled_cells(), 0);
        assert_eq!(snap.hold, None);
        assert!(snap.next.is_empty());
        assert_eq!(snap.status, GameStatus::NotStarted);
    }

    #[test]
    fn test_active_piece_painted_over_settled() {
        let mut state = reduce(None, &Action::GamePlay);
        state.blocks.push(Block::new(Color::Red, 0, 19));
        let state = reduce(
            Some(state),
            &Action::set_active_piece(catalog::template(PieceKind::J)),
        );
        let snap = GameSnapshot::from_state(&state);

        assert_eq!(snap.filled_cells(), 5);
        assert_eq!(snap.row(0), [(Color::Blue, 3), (Color::Blue, 4), (Color::Blue, 5)]);
        assert_eq!(snap.row(1), [(Color::Blue, 5)]);
        assert_eq!(snap.row(19), [(Color::Red, 0)]);
        assert!(snap.row(-1).is_empty());
        assert!(snap.row(20).is_empty());
    }

    #[test]
    fn test_out_of_range_blocks_skipped() {
        let mut state = GameState::default();
        state.blocks.push(Block::new(Color::Red, -1, 3));
        state.blocks.push(Block::new(Color::Red, 3, 20));
        assert_eq!(GameSnapshot::from_state(&state).filled_cells(), 0);
    }

    #[test]
    fn test_hud_fields() {
        let mut state = reduce(None, &Action::GamePlay);
        for kind in [PieceKind::S, PieceKind::Z] {
            state = reduce(Some(state), &Action::add_piece_to_waiting(catalog::template(kind)));
        }
        state = reduce(
            Some(state),
            &Action::set_active_piece(catalog::template(PieceKind::T)),
        );
        state = reduce(Some(state), &Action::SwapPiece);
        state = reduce(Some(state), &Action::IncrementTurn);

        let snap = GameSnapshot::from(&state);
        assert_eq!(snap.next, [PieceKind::S, PieceKind::Z]);
        assert_eq!(snap.hold, Some(PieceKind::T));
        assert_eq!(snap.turn, 1);
        assert_eq!(snap.status, GameStatus::Playing);
    }

    #[test]
    fn test_display() {
        let mut state = GameState::default();
        state.blocks.push(Block::new(Color::Cyan, 0, 0));
        let text = GameSnapshot::from_state(&state).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], format!("[x]{}", "[ ]".repeat(9)));
        assert_eq!(lines[19], "[ ]".repeat(10));
    }
}
