//! RNG module - seeded generator for mine placement
//!
//! A small LCG keeps the model free of platform randomness: the same seed always
//! lays out the same board, which is what tests and bug reports rely on.

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
    ///
    /// Scales from the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Move a uniform random sample of `count` elements to the front of `slice`.
    ///
    /// Runs exactly `count` swaps, so it always terminates.
    pub fn partial_shuffle<T>(&mut self, slice: &mut [T], count: usize) {
        let len = slice.len();
        for i in 0..count.min(len) {
            let j = i + self.next_range((len - i) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Draw a seed for a child generator (one per new board).
    pub fn next_seed(&mut self) -> u32 {
        self.next_u32() ^ 0x9E37_79B9
    }

    /// Get the current RNG state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
