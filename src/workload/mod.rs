//! Synthetic reference streams.
//!
//! - [`Locality`] - How tightly successive references cluster
//! - [`generate`] - Produce a whole reference sequence up front

mod generator;
mod locality;

pub use generator::generate;
pub use locality::Locality;
