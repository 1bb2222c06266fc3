use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for everything the engine leaves to chance: shortcut
/// corners and who opens a game.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream seeded from this one, for a consumer that must not
    /// share draws with its parent.
    pub fn fork(&mut self) -> SessionRng {
        let seed: u64 = self.rng.random();
        Self::new(seed)
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}
