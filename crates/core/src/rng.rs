//! RNG module - injectable piece sources
//!
//! The game never reaches for a global random generator. Instead it owns a
//! [`PieceSource`] chosen by the caller:
//!
//! - [`SimpleRng`]: seeded LCG, uniform draw over the seven kinds
//! - [`BagRandomizer`]: "7-bag" draws, every kind once per bag
//! - [`ScriptedPieces`]: a fixed, repeating sequence for reproducible tests
//! - [`Randomizer`]: runtime choice between the two random sources

use crate::types::PieceKind;

/// Anything that can hand out piece kinds on demand.
pub trait PieceSource {
    /// Draw the next piece kind.
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (can be fed back into [`SimpleRng::new`])
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl BagRandomizer {
    /// Create a new bag randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill_bag();
        bag
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for BagRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

/// Replays a fixed sequence of kinds, wrapping around at the end.
///
/// An empty script yields `I` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPieces {
    script: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedPieces {
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
        }
    }

    /// Always hand out the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        if self.script.is_empty() {
            return PieceKind::I;
        }
        let kind = self.script[self.pos % self.script.len()];
        self.pos = (self.pos + 1) % self.script.len();
        kind
    }
}

/// Runtime-selectable random source.
#[derive(Debug, Clone)]
pub enum Randomizer {
    Uniform(SimpleRng),
    Bag(BagRandomizer),
}

impl Randomizer {
    pub fn uniform(seed: u32) -> Self {
        Randomizer::Uniform(SimpleRng::new(seed))
    }

    pub fn bag(seed: u32) -> Self {
        Randomizer::Bag(BagRandomizer::new(seed))
    }
}

impl PieceSource for Randomizer {
    fn next_kind(&mut self) -> PieceKind {
        match self {
            Randomizer::Uniform(rng) => rng.next_kind(),
            Randomizer::Bag(bag) => bag.next_kind(),
        }
    }
}
