//! Error types for virtmem.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::common::{FrameId, PageId};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
///
/// Callers that only care whether the run was rejected up front, ran out of
/// memory, or hit a policy bug can match on this instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, rejected before any simulation work.
    Validation,
    /// The reference buffer could not be obtained.
    Allocation,
    /// Neither the policy nor the free-frame scan produced a victim.
    FatalInvariant,
}

/// All possible errors in virtmem.
#[derive(Debug, Error)]
pub enum Error {
    /// A count exceeds its compile-time maximum.
    #[error("Invalid parameter: {name}={value} exceeds maximum of {max}")]
    ParameterOutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },

    /// A count was given as a negative number.
    #[error("Invalid parameter: {name}={value} must not be negative")]
    NegativeParameter { name: &'static str, value: i64 },

    /// The policy name is not one of `rand`, `fifo`, `lru`.
    #[error("Unknown replacement policy '{0}' (expected rand, fifo or lru)")]
    UnknownPolicy(String),

    /// The locality name is not one of `ll`, `ml`, `hl`.
    #[error("Unknown locality '{0}' (expected ll, ml or hl)")]
    UnknownLocality(String),

    /// References were requested from an address space with no pages.
    #[error("Invalid parameters: cannot generate references with npages=0")]
    EmptyAddressSpace,

    /// References were requested with no frames to load them into.
    #[error("Invalid parameters: cannot service page faults with nframes=0")]
    NoFrames,

    /// A supplied reference lies outside `[0, npages)`.
    #[error("Invalid page reference {page} (npages={npages})")]
    InvalidPageId { page: PageId, npages: usize },

    /// The reference buffer could not be reserved.
    #[error("Memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// No frame could be chosen for a faulting page.
    ///
    /// This indicates a bug in the active replacement policy.
    #[error("No victim frame found for {page} at clock {clock}")]
    NoVictimFrame { page: PageId, clock: u64 },

    /// The victim frame chosen by the policy does not exist.
    #[error("Replacement policy chose {frame}, but only {nframes} frames exist")]
    VictimOutOfRange { frame: FrameId, nframes: usize },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ParameterOutOfRange { .. }
            | Error::NegativeParameter { .. }
            | Error::UnknownPolicy(_)
            | Error::UnknownLocality(_)
            | Error::EmptyAddressSpace
            | Error::NoFrames
            | Error::InvalidPageId { .. } => ErrorKind::Validation,
            Error::Allocation(_) => ErrorKind::Allocation,
            Error::NoVictimFrame { .. } | Error::VictimOutOfRange { .. } => {
                ErrorKind::FatalInvariant
            }
        }
    }
}
