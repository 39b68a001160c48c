//! Page slicing for the expense table

use serde::Serialize;

/// Where a page sits within the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number that was requested
    pub current_page: usize,
    /// Number of non-empty pages (0 for an empty collection)
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Size of the collection the page was cut from
    pub total_items: usize,
}

/// One page of items borrowed from a sorted collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PageInfo,
}

/// Cut page `page_number` (1-based) of `page_size` items out of `items`
///
/// Page 0 is read as page 1 and a page size of 0 as 1. Asking for a page
/// past the end is not an error: the slice is empty and `has_next` is
/// false. Callers clamp if they want to land on the last real page.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();

    let start = (page_number - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Page {
        items: &items[start..end],
        info: PageInfo {
            current_page: page_number,
            total_pages: total_items.div_ceil(page_size),
            has_previous: page_number > 1,
            has_next: page_number.saturating_mul(page_size) < total_items,
            total_items,
        },
    }
}

/// Clamp a requested page number into `1..=total_pages` (1 when empty)
pub fn clamp_page(page_number: usize, total_items: usize, page_size: usize) -> usize {
    let last = total_items.div_ceil(page_size.max(1)).max(1);
    page_number.clamp(1, last)
}
