//! Locality classes for the reference generator.

use std::fmt;
use std::str::FromStr;

use crate::common::config::{HIGH_LOCALITY_DIVISOR, MEDIUM_LOCALITY_DIVISOR};
use crate::common::Error;

/// Degree of spatial locality in a reference stream.
///
/// `Low` draws every reference uniformly. `Medium` and `High` perform a
/// random walk whose step never exceeds [`Locality::radius`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locality {
    Low,
    Medium,
    High,
}

impl Locality {
    /// Maximum step of the random walk for an address space of `npages`.
    ///
    /// Returns `None` for `Low`, which does not walk.
    ///
    /// # Example
    /// ```
    /// use virtmem::Locality;
    ///
    /// assert_eq!(Locality::Medium.radius(100), Some(5));
    /// assert_eq!(Locality::High.radius(100), Some(3));
    /// assert_eq!(Locality::Low.radius(100), None);
    /// ```
    pub fn radius(self, npages: usize) -> Option<usize> {
        match self {
            Locality::Low => None,
            Locality::Medium => Some(npages / MEDIUM_LOCALITY_DIVISOR),
            Locality::High => Some(npages / HIGH_LOCALITY_DIVISOR),
        }
    }

    /// Short command-line name.
    pub fn as_str(self) -> &'static str {
        match self {
            Locality::Low => "ll",
            Locality::Medium => "ml",
            Locality::High => "hl",
        }
    }
}

impl FromStr for Locality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ll" | "low" => Ok(Locality::Low),
            "ml" | "medium" => Ok(Locality::Medium),
            "hl" | "high" => Ok(Locality::High),
            other => Err(Error::UnknownLocality(other.to_string())),
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
