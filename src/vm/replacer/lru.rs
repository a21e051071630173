//! LRU replacement policy.
//!
//! Recency is tracked only through fault events: a hit does not refresh a
//! page's timestamp. The victim is therefore the least recently *loaded*
//! resident page.

use crate::common::FrameId;
use crate::vm::PageTable;

/// Evicts the resident page with the smallest `last_fault_time`.
///
/// Stateless: everything it needs lives in the page table.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        Self
    }

    /// Scan the page table for the oldest resident page.
    ///
    /// Ties go to the lowest page number. Returns `None` when no page is
    /// resident.
    pub fn select_victim(&mut self, table: &PageTable) -> Option<FrameId> {
        table
            .entries()
            .iter()
            .filter(|entry| entry.is_resident())
            .min_by_key(|entry| entry.last_fault_time())
            .and_then(|entry| entry.frame())
    }
}
