//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`RandomReplacer`] - Uniformly random frame
//! - [`FifoReplacer`] - Clock-indexed load-order record
//! - [`LruReplacer`] - Oldest load time among resident pages
//!
//! The policy is picked once, from a [`PolicyKind`], when the simulator is
//! built; every fault then dispatches through the closed [`Replacer`] enum.

mod fifo;
mod lru;
mod random;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::common::{Error, FrameId, PageId};
use crate::vm::PageTable;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;

/// Which replacement policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Random,
    Fifo,
    Lru,
}

impl PolicyKind {
    /// Short command-line name.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Random => "rand",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rand" | "random" => Ok(PolicyKind::Random),
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replacement policy with its private state.
#[derive(Debug, Clone)]
pub enum Replacer {
    Random(RandomReplacer),
    Fifo(FifoReplacer),
    Lru(LruReplacer),
}

impl Replacer {
    /// Build the policy `kind` for a memory of `nframes` frames.
    pub fn new(kind: PolicyKind, nframes: usize) -> Self {
        match kind {
            PolicyKind::Random => Replacer::Random(RandomReplacer::new(nframes)),
            PolicyKind::Fifo => Replacer::Fifo(FifoReplacer::new(nframes)),
            PolicyKind::Lru => Replacer::Lru(LruReplacer::new()),
        }
    }

    /// The policy this replacer implements.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Replacer::Random(_) => PolicyKind::Random,
            Replacer::Fifo(_) => PolicyKind::Fifo,
            Replacer::Lru(_) => PolicyKind::Lru,
        }
    }

    /// Select a victim frame.
    ///
    /// Returns `None` when the policy has no candidate. The caller falls
    /// back to an empty frame, and treats a missing one as fatal.
    pub fn select_victim<R: Rng>(
        &mut self,
        table: &PageTable,
        clock: u64,
        rng: &mut R,
    ) -> Option<FrameId> {
        match self {
            Replacer::Random(r) => r.select_victim(rng),
            Replacer::Fifo(r) => r.select_victim(clock),
            Replacer::Lru(r) => r.select_victim(table),
        }
    }

    /// Record that `page` was just loaded into `frame`.
    pub fn record_load(&mut self, frame: FrameId, page: PageId) {
        if let Replacer::Fifo(r) = self {
            r.record_load(frame, page);
        }
    }
}
