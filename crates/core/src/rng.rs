//! RNG module - injectable randomness for next-piece selection
//!
//! The engine never reaches for ambient global randomness. Every operation that
//! needs a random choice takes a [`RandomSource`], so tests can replay a game
//! exactly by seeding a [`SimpleRng`].

/// Source of uniformly distributed random numbers
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "next_below bound must be positive");
        // Multiply-shift keeps the high bits, which are the good ones for an LCG.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Current internal state, usable as a seed to replay from here
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_below(7) < 7);
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw(mut rng: impl RandomSource) -> u32 {
            rng.next_u32()
        }

        let mut direct = SimpleRng::new(5);
        let mut owned = SimpleRng::new(5);
        assert_eq!(direct.next_u32(), draw(&mut owned));
        assert_eq!(direct.state(), owned.state());
    }

    /// Fixed sequence, so a replay can be trusted across refactors.
    struct Counter(u32);

    impl RandomSource for Counter {
        fn next_u32(&mut self) -> u32 {
            self.0 = self.0.wrapping_add(1 << 29);
            self.0
        }
    }

    #[test]
    fn test_custom_source_maps_to_buckets() {
        let mut counter = Counter(0);
        let picks: Vec<u32> = (0..4).map(|_| counter.next_below(8)).collect();
        assert_eq!(picks, vec![1, 2, 3, 4]);
    }
}
