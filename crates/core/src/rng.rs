//! RNG module - deterministic random source for secret generation
//!
//! A small LCG is enough for a guessing game and keeps games reproducible:
//! the same seed always produces the same sequence of secrets.

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

    /// Generate a uniform value in range [0, max)
    ///
    /// Uses the high bits of the LCG output (the low bits have short periods)
    /// and rejects the biased zone, so every value is equally likely.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range requires a non-empty range");
        let max = max.max(1);
        let threshold = max.wrapping_neg() % max;
        loop {
            let m = u64::from(self.next_u32()) * u64::from(max);
            if (m as u32) >= threshold {
                return (m >> 32) as u32;
            }
        }
    }

    /// Shuffle only the first `count` slots of `slice`.
    ///
    /// After the call, `slice[..count]` is a uniform sample without replacement
    /// from the whole slice, in uniform random order.
    pub fn partial_shuffle<T>(&mut self, slice: &mut [T], count: usize) {
        let len = slice.len();
        for i in 0..count.min(len) {
            let j = i + self.next_range((len - i) as u32) as usize;
            slice.swap(i, j);
        }
    }
}
