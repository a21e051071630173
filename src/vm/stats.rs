//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated over one simulation.
///
/// The simulator is single-threaded, so these are plain integers owned by
/// the [`Simulator`](crate::vm::Simulator) and updated in place.
#[derive(Debug, Default, Clone)]
pub struct SimStats {
    /// References processed.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that found their page absent.
    pub faults: u64,

    /// Faults that had to push a resident page out.
    pub evictions: u64,
}

impl SimStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            references: self.references,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A point-in-time copy of simulation statistics.
///
/// # Example
/// ```
/// use virtmem::StatsSnapshot;
///
/// let snapshot = StatsSnapshot { references: 10, hits: 7, faults: 3, evictions: 1 };
/// assert_eq!(snapshot.fault_rate(), 0.3);
/// println!("{}", snapshot);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub references: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
