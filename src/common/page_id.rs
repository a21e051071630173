//! Page identifier type.

use std::fmt;

/// Identifies a page of the simulated address space.
///
/// Pages are numbered `0..npages` and index straight into the page table,
/// so the inner value is a `usize`.
///
/// # Example
/// ```
/// use virtmem::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "Page(42)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }

    /// Index of this page in the page table.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
