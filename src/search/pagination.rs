//! Fixed-size pagination and page-number windows.

use crate::models::constants::PAGE_WINDOW;

/// Number of pages needed for `count` items (0 when there are no items).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Current page, 1-based, clamped into `[1, max(total_pages, 1)]`.
    pub current: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Zero-based index of the first item on this page.
    pub start_index: usize,
    /// Total number of items across all pages.
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exclusive end index of this page's slice.
    pub fn end_index(&self) -> usize {
        self.start_index + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Whether page controls should be shown at all.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// "Showing X to Y of Z results".
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No results".to_string();
        }
        format!(
            "Showing {} to {} of {} results",
            self.start_index + 1,
            self.end_index(),
            self.total
        )
    }

    /// Page numbers to render as controls.
    pub fn window(&self) -> Vec<usize> {
        page_window(self.current, self.total_pages)
    }
}

/// Slice `items` into page `requested` of `page_size` items.
pub fn paginate<T>(items: &[T], requested: usize, page_size: usize) -> Page<'_, T> {
    let total = items.len();
    let pages = total_pages(total, page_size);
    let current = requested.clamp(1, pages.max(1));

    let start_index = ((current - 1) * page_size).min(total);
    let end = (start_index + page_size).min(total);

    tracing::debug!(requested, current, pages, total, "paginated");

    Page {
        items: &items[start_index..end],
        current,
        total_pages: pages,
        page_size,
        start_index,
        total,
    }
}

/// Up to [`PAGE_WINDOW`] page numbers centred on `current` where possible.
///
/// - `total <= 5`: every page
/// - `current <= 3`: pages 1..=5
/// - `current >= total - 2`: the last five pages
/// - otherwise `current - 2 ..= current + 2`
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }

    let half = PAGE_WINDOW / 2;
    let first = if current <= half + 1 {
        1
    } else if current >= total - half {
        total - PAGE_WINDOW + 1
    } else {
        current - half
    };

    (first..first + PAGE_WINDOW).collect()
}
