//! Pagination calculator: pure, stateless slicing of the filtered view.

use crate::model::UserRecord;

/// One page of the filtered view plus its page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Records on this page, at most `page_size` of them. Empty when the
    /// requested page is out of range.
    pub items: &'a [UserRecord],
    /// Total number of pages: `ceil(len / page_size)`, 0 for an empty view.
    pub total_pages: usize,
    /// The ordered page number sequence `1..=total_pages`, for rendering
    /// numbered page links.
    pub page_numbers: Vec<usize>,
}

/// Total page count for a view of `len` records.
///
/// An empty view has 0 pages; the UI copes by rendering no page links.
/// A `page_size` of 0 is degenerate and also reports 0 pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The ordered sequence `1..=total` of page numbers.
pub fn page_numbers(total: usize) -> Vec<usize> {
    (1..=total).collect()
}

/// Slice one page out of a filtered view.
///
/// `page` is 1-indexed. Out-of-range pages (including page 0) yield an
/// empty item slice rather than an error; there is no wraparound.
pub fn paginate(view: &[UserRecord], page: usize, page_size: usize) -> PageView<'_> {
    let total = total_pages(view.len(), page_size);

    let items = if page == 0 || page_size == 0 {
        &view[0..0]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(view.len());
        let end = start.saturating_add(page_size).min(view.len());
        &view[start..end]
    };

    PageView {
        items,
        total_pages: total,
        page_numbers: page_numbers(total),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
