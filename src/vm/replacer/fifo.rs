//! FIFO (First-In-First-Out) replacement policy.
//!
//! The load-order record has one slot per frame. The candidate victim is
//! the slot at `clock % nframes`; because the clock advances once per
//! fault and frames are filled in order during warm-up, this visits frames
//! round-robin, i.e. in the order they were loaded.

use crate::common::{FrameId, PageId};

/// A clock-indexed FIFO eviction policy.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Page most recently loaded into each frame, `None` while empty.
    slots: Vec<Option<PageId>>,
}

impl FifoReplacer {
    /// Create a FIFO replacer with `nframes` empty slots.
    pub fn new(nframes: usize) -> Self {
        Self {
            slots: vec![None; nframes],
        }
    }

    /// Select the frame at `clock % nframes`.
    ///
    /// An empty slot yields `None`. A filled slot is cleared as it is read;
    /// the next [`record_load`](Self::record_load) refills it.
    pub fn select_victim(&mut self, clock: u64) -> Option<FrameId> {
        if self.slots.is_empty() {
            return None;
        }
        let index = (clock % self.slots.len() as u64) as usize;
        self.slots[index].take().map(|_| FrameId::new(index))
    }

    /// Record that `page` was loaded into `frame`.
    pub fn record_load(&mut self, frame: FrameId, page: PageId) {
        self.slots[frame.0] = Some(page);
    }

    /// Page recorded for `frame`, if any.
    pub fn recorded(&self, frame: FrameId) -> Option<PageId> {
        self.slots.get(frame.0).copied().flatten()
    }
}
