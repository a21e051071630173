//! Virtual memory simulation.
//!
//! # Components
//! - [`Simulator`] - Drives a reference stream through the page table
//! - [`PageTable`] - Residency state for pages and frames
//! - [`replacer`] - Eviction policy implementations
//! - [`SimStats`] - Hit/fault/eviction counters

pub mod page_table;
pub mod replacer;
mod simulator;
mod stats;

pub use page_table::{Lookup, PageTable, PageTableEntry};
pub use replacer::{PolicyKind, Replacer};
pub use simulator::{simulate, SimReport, Simulator};
pub use stats::{SimStats, StatsSnapshot};
