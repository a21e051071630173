//! Common types and utilities shared across virtmem.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and validated run parameters
//! - Error types
//! - Identifiers (PageId, FrameId)
//! - The seedable random source

pub mod config;
pub mod error;
mod frame_id;
mod page_id;
mod rng;

pub use config::SimConfig;
pub use error::{Error, ErrorKind, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
pub use rng::SimRng;
