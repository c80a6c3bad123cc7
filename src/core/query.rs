//! The pure query recomputation: filter, sort, paginate
//!
//! [`run_query`] is the single recomputation entry point a view binds
//! to. It is a pure function of its four inputs, with no hidden state
//! or memory of previous slices, so calling it twice with identical
//! inputs yields identical output.

use crate::core::filter::FilterState;
use crate::core::record::Record;
use crate::core::sort::SortOrder;
use serde::Serialize;

/// Requested pagination window: 1-based page number and a fixed page
/// size per view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Start at page 1 with the given page size (minimum 1)
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Requested page number, at least 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Request a page; clamping against the matched total happens at
    /// query time
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Back to page 1, required whenever the filter state changes
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// The derived, read-only visible slice plus the counts the
/// pagination chrome needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<T> {
    /// Records on the current page, at most `page_size` of them
    pub items: Vec<T>,

    /// Total records matching the filter, across all pages
    pub total_matched: usize,

    /// Total pages, at least 1 even for an empty match set
    pub total_pages: usize,

    /// Current page after clamping into `[1, total_pages]`
    pub page: usize,

    /// Page size the slice was computed with
    pub page_size: usize,
}

impl<T> PageSlice<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive bounds for "Showing X–Y of Z", `None` when
    /// nothing matched
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        Some((start, start + self.items.len() - 1))
    }
}

/// Recompute the visible slice: filter, stable sort, clamp, slice
pub fn run_query<'a, T, I>(
    records: I,
    filter: &FilterState,
    sort: &SortOrder,
    page: &PageRequest,
) -> PageSlice<T>
where
    T: Record,
    I: IntoIterator<Item = &'a T>,
{
    let mut matched: Vec<T> = records
        .into_iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect();
    sort.apply(&mut matched);

    let total_matched = matched.len();
    let page_size = page.page_size();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let current = page.page().clamp(1, total_pages);
    let start = (current - 1) * page_size;
    let items = matched.into_iter().skip(start).take(page_size).collect();

    PageSlice {
        items,
        total_matched,
        total_pages,
        page: current,
        page_size,
    }
}
