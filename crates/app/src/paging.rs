//! Paging

use std::num::NonZeroU32;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A 1-based page number and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: NonZeroU32,
    size: NonZeroU32,
}

impl PageRequest {
    /// Build a page request, treating page `0` as the first page and clamping
    /// the size to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: NonZeroU32::new(number).unwrap_or(NonZeroU32::MIN),
            size: NonZeroU32::new(size.min(MAX_PAGE_SIZE)).unwrap_or(NonZeroU32::MIN),
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number.get()
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Rows to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.number.get() - 1) * u64::from(self.size.get())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.request.number() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.request.offset() + u64::from(self.request.size()) < self.total
    }
}
