//! Command-line interface for the `simulate` binary.

use clap::Parser;

use crate::common::{Result, SimConfig};
use crate::vm::{simulate, SimReport};

/// Simulate demand paging over a synthetic reference stream and report the
/// number of page faults.
#[derive(Debug, Parser)]
#[command(name = "simulate", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Number of pages in the virtual address space (0..=1000).
    pub npages: i64,

    /// Number of physical frames (0..=500).
    pub nframes: i64,

    /// Replacement policy: rand, fifo or lru.
    pub policy: String,

    /// Number of page references to generate (0..=5000).
    pub nrefs: i64,

    /// Reference locality: ll (low), ml (medium) or hl (high).
    pub locality: String,

    /// Seed for the random source. Defaults to the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Validate the arguments into a [`SimConfig`].
    pub fn config(&self) -> Result<SimConfig> {
        SimConfig::from_raw(
            self.npages,
            self.nframes,
            self.policy.parse()?,
            self.nrefs,
            self.locality.parse()?,
        )
    }

    /// Validate and run the simulation.
    pub fn run(&self) -> Result<SimReport> {
        let config = self.config()?;
        simulate(&config, self.seed)
    }
}

/// The single line printed on success.
pub fn fault_line(faults: u64) -> String {
    format!("Total number of page faults: {}", faults)
}
