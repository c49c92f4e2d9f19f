//! Deterministic random number generation for shuffling.
//!
//! Same seed, same deal: a `GameRng` seeded with a given value always
//! produces the same shuffle sequence, which makes deals reproducible in
//! tests and lets players replay a specific game by seed.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for deck shuffling.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness. The
/// shuffle is a uniformly random permutation of the slice.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place with a uniformly random permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
