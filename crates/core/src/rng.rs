//! RNG module - starting-player coin flips
//!
//! A small seeded LCG keeps rounds reproducible in tests. The binary seeds it
//! from the OS when no `--seed` is given.

use crate::types::Player;

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

    /// Fair coin flip.
    ///
    /// Uses the top bit: the low bits of a power-of-two LCG have short periods
    /// (bit 0 simply alternates).
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }

    /// Pick the player who opens a round, X or O with equal probability
    pub fn coin_flip(&mut self) -> Player {
        if self.next_bool() {
            Player::O
        } else {
            Player::X
        }
    }

    /// Current internal state (reseeding with it replays the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
