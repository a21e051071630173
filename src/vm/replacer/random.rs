//! Random replacement policy.

use rand::Rng;

use crate::common::FrameId;

/// Evicts a uniformly random frame.
///
/// Keeps no history; the random source is supplied on every call so runs
/// stay reproducible under a fixed seed.
#[derive(Debug, Clone)]
pub struct RandomReplacer {
    nframes: usize,
}

impl RandomReplacer {
    pub fn new(nframes: usize) -> Self {
        Self { nframes }
    }

    /// Pick a frame in `[0, nframes)`. `None` only when there are no frames.
    pub fn select_victim<R: Rng>(&mut self, rng: &mut R) -> Option<FrameId> {
        if self.nframes == 0 {
            return None;
        }
        Some(FrameId::new(rng.random_range(0..self.nframes)))
    }
}
