//! Page table - per-page residency state and the frame table it owns.
//!
//! The [`PageTable`] is the only place frame contents change. Replacement
//! policies get a shared borrow to inspect it; the simulator drives
//! [`PageTable::evict`] and [`PageTable::install`] during fault handling.

use crate::common::{FrameId, PageId};

/// Residency state of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    resident: bool,
    frame: Option<FrameId>,
    last_fault_time: Option<u64>,
}

impl PageTableEntry {
    /// Whether the page currently occupies a frame.
    #[inline]
    pub fn is_resident(&self) -> bool {
        self.resident
    }

    /// The frame holding this page, if resident.
    #[inline]
    pub fn frame(&self) -> Option<FrameId> {
        if self.resident {
            self.frame
        } else {
            None
        }
    }

    /// Logical clock value at the most recent load.
    ///
    /// `None` until the page is loaded for the first time.
    #[inline]
    pub fn last_fault_time(&self) -> Option<u64> {
        self.last_fault_time
    }
}

/// Result of a page table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The page is resident in the given frame.
    Hit(FrameId),
    /// The page is not resident: a page fault.
    Miss,
}

/// Page table plus frame table for one simulation.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │                      PageTable                        │
/// │  entries: Vec<PageTableEntry>   frames: Vec<Option>   │
/// │  [P0][P1][P2] ... [Pn-1]  ───▶  [F0][F1] ... [Fm-1]   │
/// │   resident / frame / time        occupant page        │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    frames: Vec<Option<PageId>>,
    resident: usize,
}

impl PageTable {
    /// Create a table with every page absent and every frame empty.
    pub fn new(npages: usize, nframes: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::default(); npages],
            frames: vec![None; nframes],
            resident: 0,
        }
    }

    /// Check residency of `page`. Never mutates state.
    ///
    /// # Panics
    /// Panics if `page` is outside `[0, npages)`.
    #[inline]
    pub fn lookup(&self, page: PageId) -> Lookup {
        match self.entries[page.index()].frame() {
            Some(frame) => Lookup::Hit(frame),
            None => Lookup::Miss,
        }
    }

    /// Number of pages in the address space.
    pub fn npages(&self) -> usize {
        self.entries.len()
    }

    /// Number of physical frames.
    pub fn nframes(&self) -> usize {
        self.frames.len()
    }

    /// Whether `page` belongs to this address space.
    pub fn contains(&self, page: PageId) -> bool {
        page.index() < self.entries.len()
    }

    /// Entry for `page`, or `None` if out of range.
    pub fn entry(&self, page: PageId) -> Option<&PageTableEntry> {
        self.entries.get(page.index())
    }

    /// All entries, indexed by page number.
    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }

    /// Page occupying `frame`, or `None` if empty or out of range.
    pub fn frame_content(&self, frame: FrameId) -> Option<PageId> {
        self.frames.get(frame.0).copied().flatten()
    }

    /// Number of resident pages (equivalently, occupied frames).
    pub fn resident_count(&self) -> usize {
        self.resident
    }

    /// Whether every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.resident == self.frames.len()
    }

    /// Lowest-numbered empty frame.
    pub fn first_free_frame(&self) -> Option<FrameId> {
        if self.is_full() {
            return None;
        }
        self.frames.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Empty `frame`, marking its occupant absent.
    ///
    /// Returns the evicted page, or `None` if the frame was already empty.
    pub fn evict(&mut self, frame: FrameId) -> Option<PageId> {
        let victim = self.frames[frame.0].take()?;
        let entry = &mut self.entries[victim.index()];
        entry.resident = false;
        entry.frame = None;
        self.resident -= 1;
        Some(victim)
    }

    /// Load `page` into the empty `frame` at logical time `clock`.
    ///
    /// # Panics
    /// Panics if the frame is occupied or the page is already resident.
    pub fn install(&mut self, page: PageId, frame: FrameId, clock: u64) {
        assert!(
            self.frames[frame.0].is_none(),
            "install into occupied {}",
            frame
        );
        let entry = &mut self.entries[page.index()];
        assert!(!entry.resident, "{} is already resident", page);

        entry.resident = true;
        entry.frame = Some(frame);
        entry.last_fault_time = Some(clock);
        self.frames[frame.0] = Some(page);
        self.resident += 1;
    }
}
