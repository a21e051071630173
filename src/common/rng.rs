//! Seedable random source shared by the generator and the Random policy.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Seedable random number generator.
///
/// Wraps `StdRng` and remembers its seed so a run can be reported and
/// replayed. All `rand::Rng` helpers (`random_range`, ...) are available
/// through the blanket impl over `RngCore`.
#[derive(Debug)]
pub struct SimRng {
    seed: u64,
    rng: StdRng,
}

impl SimRng {
    /// Create a generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}
