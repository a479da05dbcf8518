/// Pagination request parameters, 1-based page numbering
///
/// # Example
/// ```
/// use customer_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(1, 10);
/// let third = PageRequest::new(3, 10);
/// assert_eq!(first.offset(), 0);
/// assert_eq!(third.offset(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based)
    pub page: usize,
    /// Maximum number of items per page
    pub page_size: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `page` - Page number (1-based, a 0 is treated as 1)
    /// * `page_size` - Number of items per page
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// Number of pages needed for `total` items. An empty sequence still has
/// one (empty) page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        1
    } else {
        total.div_ceil(page_size).max(1)
    }
}

/// Paginated response containing items and metadata
///
/// # Example
/// ```
/// use customer_core_db::repository::pagination::{paginate, PageRequest};
///
/// let items: Vec<u32> = (1..=25).collect();
/// let page = paginate(&items, PageRequest::new(3, 10));
///
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total_pages(), 3);
/// assert_eq!(page.start_index(), 21);
/// assert_eq!(page.end_index(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// The page actually served (1-based)
    pub page: usize,
    /// Maximum number of items per page
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
        }
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.page_size
    }

    /// Get the total number of pages (at least 1)
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    /// 1-based position of the first item on this page, 0 when empty
    pub fn start_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based position of the last item on this page, 0 when empty
    pub fn end_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.offset() + self.items.len()
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset() + self.items.len() < self.total
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }
}

/// Slices one page out of `items`.
///
/// The requested page is clamped into `[1, total_pages]`; callers that need
/// to reject an out-of-range request check it before calling.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len();
    let last = total_pages(total, request.page_size);
    let page = request.page.clamp(1, last);
    let start = ((page - 1) * request.page_size).min(total);
    let end = (start + request.page_size).min(total);

    Page::new(items[start..end].to_vec(), total, page, request.page_size)
}

/// Page numbers a pager shows: at most `max_visible`, centred on `current`
/// and shifted so the window stays inside `[1, total_pages]`.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_items_in_pages_of_ten() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, PageRequest::new(3, 10));
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items.len(), 5);
        assert!(page.is_last_page());
        assert!(!page.has_more());

        let first = paginate(&items, PageRequest::new(1, 10));
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert!(first.is_first_page());
        assert!(first.has_more());
        assert_eq!(first.start_index(), 1);
        assert_eq!(first.end_index(), 10);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, PageRequest::new(4, 10));
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);

        let page = paginate(&items, PageRequest::new(0, 10));
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_sequence_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, PageRequest::new(1, 10));
        assert_eq!(page.total_pages(), 1);
        assert!(page.items.is_empty());
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
        assert!(page.is_first_page());
        assert!(page.is_last_page());
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
        assert!(page_window(1, 0, 5).is_empty());
    }
}
