//! Configuration constants and validated run parameters.

use crate::common::{Error, Result};
use crate::vm::replacer::PolicyKind;
use crate::workload::Locality;

/// Largest address space a simulation may use, in pages.
///
/// Bounds the memory used by the simulation itself, not the simulated system.
pub const MAX_PAGES: usize = 1000;

/// Largest number of physical frames a simulation may use.
pub const MAX_FRAMES: usize = 500;

/// Longest reference stream a single run may generate.
pub const MAX_REFS: usize = 5000;

/// Walk radius divisor for medium locality (`radius = npages / 20`).
pub const MEDIUM_LOCALITY_DIVISOR: usize = 20;

/// Walk radius divisor for high locality (`radius = npages / 33`).
pub const HIGH_LOCALITY_DIVISOR: usize = 33;

/// Parameters of one simulation run.
///
/// Construct through [`SimConfig::new`] or [`SimConfig::from_raw`]; both
/// reject anything outside the declared bounds before any work begins.
///
/// # Example
/// ```
/// use virtmem::{Locality, PolicyKind, SimConfig};
///
/// let config = SimConfig::new(100, 10, PolicyKind::Lru, 1000, Locality::High).unwrap();
/// assert_eq!(config.nframes, 10);
///
/// assert!(SimConfig::new(1001, 10, PolicyKind::Lru, 1000, Locality::High).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub npages: usize,
    pub nframes: usize,
    pub policy: PolicyKind,
    pub nrefs: usize,
    pub locality: Locality,
}

impl SimConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    /// - `Error::ParameterOutOfRange` if a count exceeds its maximum
    /// - `Error::EmptyAddressSpace` if references are requested with no pages
    /// - `Error::NoFrames` if references are requested with no frames
    pub fn new(
        npages: usize,
        nframes: usize,
        policy: PolicyKind,
        nrefs: usize,
        locality: Locality,
    ) -> Result<Self> {
        check_bound("npages", npages, MAX_PAGES)?;
        check_bound("nframes", nframes, MAX_FRAMES)?;
        check_bound("nrefs", nrefs, MAX_REFS)?;

        if nrefs > 0 && npages == 0 {
            return Err(Error::EmptyAddressSpace);
        }
        if nrefs > 0 && nframes == 0 {
            return Err(Error::NoFrames);
        }

        Ok(Self {
            npages,
            nframes,
            policy,
            nrefs,
            locality,
        })
    }

    /// Build a configuration from signed command-line values.
    ///
    /// Negative counts are rejected with `Error::NegativeParameter`.
    pub fn from_raw(
        npages: i64,
        nframes: i64,
        policy: PolicyKind,
        nrefs: i64,
        locality: Locality,
    ) -> Result<Self> {
        Self::new(
            non_negative("npages", npages)?,
            non_negative("nframes", nframes)?,
            policy,
            non_negative("nrefs", nrefs)?,
            locality,
        )
    }
}

fn check_bound(name: &'static str, value: usize, max: usize) -> Result<()> {
    if value > max {
        return Err(Error::ParameterOutOfRange { name, value, max });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::NegativeParameter { name, value })
}
