use crate::paging::Page;

/// Navigation data for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page_number: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> From<&Page<T>> for Paging {
    fn from(page: &Page<T>) -> Self {
        Self {
            page_number: page.request.number(),
            page_size: page.request.size(),
            total: page.total,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
        }
    }
}
