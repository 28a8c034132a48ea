//! Seedable random number generation for game setup.
//!
//! Every source of randomness in a game (exit placement, secret codes) is drawn
//! from a [`GameRng`] handed to `new_game`, so a seed fully determines a game.
//!
//! ```
//! use termpuzzles::core::rng::GameRng;
//! use rand::Rng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.random_range(0..100), b.random_range(0..100));
//! ```

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a random seed. The seed is kept so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.random_range(0..1000), rng2.random_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<u32> = (0..10).map(|_| rng1.random_range(0..1000)).collect();
        let seq2: Vec<u32> = (0..10).map(|_| rng2.random_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_is_kept() {
        let rng = GameRng::new(7);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut original = GameRng::from_entropy();
        let mut replay = GameRng::new(original.seed());

        assert_eq!(original.next_u64(), replay.next_u64());
    }
}
