//! virtmem - A virtual memory page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            virtmem                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Front end (cli/, main.rs)                 │   │
//! │  │     simulate <npages> <nframes> <policy> <nrefs> <loc>   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Workload (workload/)  [seedable SimRng]         │   │
//! │  │        Low: uniform  |  Medium / High: random walk       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Simulation (vm/)                          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │    Eviction Policies: Random | FIFO | LRU       │   │   │
//! │  │   │          (chosen once per simulator)            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        Simulator + PageTable + Statistics                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config, SimRng)
//! - [`workload`] - Reference stream generation
//! - [`vm`] - Page table, eviction policies and the fault simulator
//! - [`cli`] - Argument parsing for the `simulate` binary
//!
//! # Quick Start
//! ```
//! use virtmem::{simulate, Locality, PolicyKind, SimConfig};
//!
//! let config = SimConfig::new(100, 10, PolicyKind::Lru, 1000, Locality::Medium).unwrap();
//! let report = simulate(&config, Some(7)).unwrap();
//! assert!(report.faults <= 1000);
//! ```

pub mod cli;
pub mod common;
pub mod vm;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_FRAMES, MAX_PAGES, MAX_REFS};
pub use common::{Error, ErrorKind, FrameId, PageId, Result, SimConfig, SimRng};

pub use vm::{
    simulate, Lookup, PageTable, PageTableEntry, PolicyKind, Replacer, SimReport, SimStats,
    Simulator, StatsSnapshot,
};
pub use workload::{generate, Locality};
