//! RNG module - uniform random piece selection
//!
//! Each draw picks one of the seven catalog templates with equal
//! probability. There is no bag: repeats are allowed, which is how the
//! game has always dealt pieces.
//!
//! The generator is a small LCG so a seed fully determines the sequence
//! (handy for replaying a game in tests).

use crate::catalog;
use crate::types::{Piece, PieceKind};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Seeded piece dealer state.
///
/// Steps `state = state * MULTIPLIER + INCREMENT` modulo 2^32, so two
/// generators built from the same seed deal identical games.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed `0` is treated as `1`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    /// Advance one step and return the new state
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Value in `0..max`, taken from the high bits of the next step
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (a seed that continues this sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pick a kind uniformly at random
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Pick a catalog template uniformly at random
pub fn random_piece(rng: &mut SimpleRng) -> Piece {
    catalog::template(random_kind(rng))
}

/// Where the driver gets new pieces from
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;
}

impl PieceSource for SimpleRng {
    fn next_piece(&mut self) -> Piece {
        random_piece(self)
    }
}

/// Replays a fixed list of kinds, cycling when exhausted.
///
/// Used to script deterministic games.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            index: 0,
        }
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece(&mut self) -> Piece {
        if self.kinds.is_empty() {
            return Piece::empty();
        }
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        catalog::template(kind)
    }
}
