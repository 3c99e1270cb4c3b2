//! Catalog module - the seven tetromino templates
//!
//! Shapes are authored in local coordinates with the top row at y = 0.
//! Placement onto the board (horizontal centering) happens in the reducer;
//! the y values here are the spawn rows.

use crate::types::{Block, Color, Piece, PieceKind, PIECE_BLOCKS};

/// Shape of a template: four blocks in local coordinates
pub type Template = [Block; PIECE_BLOCKS];

const fn shape(color: Color, cells: [(i32, i32); PIECE_BLOCKS]) -> Template {
    [
        Block::new(color, cells[0].0, cells[0].1),
        Block::new(color, cells[1].0, cells[1].1),
        Block::new(color, cells[2].0, cells[2].1),
        Block::new(color, cells[3].0, cells[3].1),
    ]
}

// Horizontal bar
pub const I: Template = shape(Color::Cyan, [(0, 0), (1, 0), (2, 0), (3, 0)]);

pub const J: Template = shape(Color::Blue, [(0, 0), (1, 0), (2, 0), (2, 1)]);

pub const L: Template = shape(Color::Orange, [(0, 1), (1, 1), (2, 1), (2, 0)]);

// Square, never rotated
pub const O: Template = shape(Color::Yellow, [(0, 0), (1, 0), (0, 1), (1, 1)]);

pub const S: Template = shape(Color::Lime, [(0, 1), (1, 1), (1, 0), (2, 0)]);

pub const T: Template = shape(Color::Purple, [(0, 0), (1, 0), (1, 1), (2, 0)]);

pub const Z: Template = shape(Color::Red, [(0, 0), (1, 0), (1, 1), (2, 1)]);

/// Get the template blocks for a piece kind
pub fn template_blocks(kind: PieceKind) -> Template {
    match kind {
        PieceKind::I => I,
        PieceKind::J => J,
        PieceKind::L => L,
        PieceKind::O => O,
        PieceKind::S => S,
        PieceKind::T => T,
        PieceKind::Z => Z,
    }
}

/// Get the template piece for a kind
pub fn template(kind: PieceKind) -> Piece {
    Piece::new(template_blocks(kind))
}

/// Look up the template whose fixed color matches `color`
pub fn template_for_color(color: Color) -> Piece {
    template(color.kind())
}

/// Every template, in catalog order
pub fn all() -> [Piece; 7] {
    PieceKind::ALL.map(template)
}
