//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible agent decisions and match replay.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed + call sequence = same draws
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let mut state = seed.wrapping_mul(0x9e3779b97f4a7c15) ^ 0x517cc1b727220a95;
        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Derive an independent RNG for a numbered stream
    ///
    /// Used to give each player of a simulated match its own sequence,
    /// so one player's draws never shift the other's.
    pub fn split(&self, stream: u64) -> Self {
        let mut new_state = self.state;
        new_state ^= stream.wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15);
        if new_state == 0 {
            new_state = 0x2545f4914f6cdd1d;
        }

        let mut rng = Self { state: new_state };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value 0-99 (for percentage checks)
    pub fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % max as u64) as usize
    }

    /// Generate a float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Fair coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.next_percent() < 50
    }

    /// Random permutation of the indices 0..n (Fisher-Yates)
    ///
    /// Walking arms in a fresh permutation per selection call keeps score
    /// ties from always resolving toward low indices.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.next_range(i + 1);
            indices.swap(i, j);
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut r1 = SeededRng::new(42);
        let mut r2 = SeededRng::new(42);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::new(1);
        let mut rng2 = SeededRng::new(2);

        // Should produce different sequences
        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_split_streams_differ() {
        let rng = SeededRng::new(42);

        let mut a = rng.split(0);
        let mut b = rng.split(1);

        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_percent_range() {
        let mut rng = SeededRng::new(42);

        for _ in 0..1000 {
            let p = rng.next_percent();
            assert!(p < 100);
        }
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new(42);

        for max in [1, 10, 100, 1000] {
            for _ in 0..100 {
                let val = rng.next_range(max);
                assert!(val < max, "next_range({}) returned {}", max, val);
            }
        }

        // Edge case: max = 0
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_f64_range() {
        let mut rng = SeededRng::new(42);

        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = SeededRng::new(42);

        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();
        assert!(heads > 4_500 && heads < 5_500, "heads = {}", heads);
    }

    #[test]
    fn test_shuffled_indices_is_permutation() {
        let mut rng = SeededRng::new(42);

        for n in [0, 1, 2, 7, 100] {
            let mut indices = rng.shuffled_indices(n);
            indices.sort_unstable();
            let expected: Vec<usize> = (0..n).collect();
            assert_eq!(indices, expected);
        }
    }

    #[test]
    fn test_shuffled_indices_varies_across_calls() {
        let mut rng = SeededRng::new(42);

        let orders: Vec<Vec<usize>> = (0..20).map(|_| rng.shuffled_indices(10)).collect();
        let distinct = orders.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(distinct > 1, "shuffle produced the same order 20 times");
    }
}
