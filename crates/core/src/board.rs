//! Board module - geometry over block lists
//!
//! The state stores the board as a list of settled [`Block`]s rather than a
//! grid, so every query here works on slices of blocks.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::types::{Block, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest valid column index
pub const MAX_X: i32 = BOARD_WIDTH - 1;

/// Largest valid row index
pub const MAX_Y: i32 = BOARD_HEIGHT - 1;

/// Axis-aligned bounding box of a set of blocks (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Smallest uniform shift that brings the box back onto the board.
    ///
    /// A box wider or taller than the board is aligned to the low edge.
    pub fn correction(&self) -> (i32, i32) {
        (
            axis_correction(self.min_x, self.max_x, MAX_X),
            axis_correction(self.min_y, self.max_y, MAX_Y),
        )
    }
}

fn axis_correction(min: i32, max: i32, limit: i32) -> i32 {
    if min < 0 {
        min.saturating_neg()
    } else if max > limit {
        limit.saturating_sub(max)
    } else {
        0
    }
}

/// Bounding box of `blocks`, `None` when empty
pub fn bounds(blocks: &[Block]) -> Option<Bounds> {
    let first = blocks.first()?;
    let mut b = Bounds {
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    for block in &blocks[1..] {
        b.min_x = b.min_x.min(block.x);
        b.max_x = b.max_x.max(block.x);
        b.min_y = b.min_y.min(block.y);
        b.max_y = b.max_y.max(block.y);
    }
    Some(b)
}

/// Check if position is on the board
#[inline(always)]
pub fn is_in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y)
}

/// Set of occupied (x, y) positions
pub fn occupied(blocks: &[Block]) -> HashSet<(i32, i32)> {
    blocks.iter().map(Block::pos).collect()
}

/// True if any block of `candidate` shares a position with a settled block
pub fn collides(candidate: &[Block], settled: &[Block]) -> bool {
    if candidate.is_empty() || settled.is_empty() {
        return false;
    }
    let taken = occupied(settled);
    candidate.iter().any(|b| taken.contains(&b.pos()))
}

/// Check if row `y` covers every column 0..=9 and nothing else.
///
/// Two blocks on the same cell count once.
pub fn is_row_full(blocks: &[Block], y: i32) -> bool {
    let mut xs: Vec<i32> = blocks.iter().filter(|b| b.y == y).map(|b| b.x).collect();
    xs.sort_unstable();
    xs.dedup();
    xs.iter().copied().eq(0..BOARD_WIDTH)
}

/// Every full row present in `blocks`, ascending (top of the stack first)
pub fn full_rows(blocks: &[Block]) -> ArrayVec<i32, { BOARD_HEIGHT as usize }> {
    let mut rows: Vec<i32> = blocks.iter().map(|b| b.y).collect();
    rows.sort_unstable();
    rows.dedup();

    rows.into_iter()
        .filter(|&y| is_row_full(blocks, y))
        .filter(|&y| (0..BOARD_HEIGHT).contains(&y))
        .collect()
}

/// Remove `rows` one at a time in ascending order, shifting everything
/// above each removed row down by one.
///
/// Rows must be ascending: clearing row `r` only moves blocks with `y < r`,
/// so later (lower) rows keep their index.
pub fn clear_rows(mut blocks: Vec<Block>, rows: &[i32]) -> Vec<Block> {
    for &row in rows {
        blocks.retain(|b| b.y != row);
        for b in blocks.iter_mut().filter(|b| b.y < row) {
            b.y += 1;
        }
    }
    blocks
}
