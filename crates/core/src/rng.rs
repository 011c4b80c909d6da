//! RNG module - uniform piece selection
//!
//! The spawner only needs "pick one of N uniformly". That capability is the
//! [`PieceRandomizer`] trait, injected into the board rather than reached
//! through a global:
//!
//! - [`SimpleRng`]: seeded LCG, deterministic across platforms (tests, replays)
//! - [`RandRandomizer`]: wraps any `rand::Rng` for production play

use rand::Rng;

/// Source of uniform choices for the spawner
pub trait PieceRandomizer {
    /// Return an index in `[0, n)`; `n` is never zero
    fn pick(&mut self, n: usize) -> usize;
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
        // high bits of an LCG are far better distributed than the low ones
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceRandomizer for SimpleRng {
    fn pick(&mut self, n: usize) -> usize {
        self.next_range(n as u32) as usize
    }
}

/// Adapter exposing any `rand` generator as a [`PieceRandomizer`]
#[derive(Debug, Clone)]
pub struct RandRandomizer<R> {
    rng: R,
}

impl<R: Rng> RandRandomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceRandomizer for RandRandomizer<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedRandomizer {
    pub fn new(picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "scripted randomizer needs at least one pick");
        Self { picks, next: 0 }
    }
}

impl PieceRandomizer for ScriptedRandomizer {
    fn pick(&mut self, n: usize) -> usize {
        let value = self.picks[self.next % self.picks.len()];
        self.next += 1;
        value % n
    }
}
