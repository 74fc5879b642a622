use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для настоящей игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же колоды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG для dev-CLI: системный либо детерминированный, если задан seed.
#[derive(Clone, Debug)]
pub enum AnyRng {
    System(SystemRng),
    Deterministic(DeterministicRng),
}

impl AnyRng {
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => AnyRng::Deterministic(DeterministicRng::from_seed(s)),
            None => AnyRng::System(SystemRng),
        }
    }
}

impl RandomSource for AnyRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            AnyRng::System(r) => r.shuffle(slice),
            AnyRng::Deterministic(r) => r.shuffle(slice),
        }
    }
}
