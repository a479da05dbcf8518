use customer_core_api::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

use crate::models::customer::CustomerModel;
use crate::repository::pagination::{page_window, paginate, total_pages, Page, PageRequest};
use crate::view::search::filter_records;
use crate::view::sort::{sort_records, SortField, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter, sort and page parameters of the customer table.
///
/// Holds no records: every projection is recomputed from the canonical
/// collection passed in. Changing the filter or the sort resets the page to
/// 1; navigating pages leaves filter and sort alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    /// `None` keeps the collection's own order (newest inserted first)
    pub sort: Option<SortKey>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One rendered page of the table plus the page numbers to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub page: Page<&'a CustomerModel>,
    pub page_numbers: Vec<usize>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.trim().to_string();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Clicking a column header: the active field flips direction, a new
    /// field starts ascending. Before any explicit sort the table counts as
    /// sorted by time, newest first.
    pub fn toggle_sort(&mut self, field: SortField) {
        let current = self.sort.unwrap_or(SortKey::DEFAULT);
        self.sort = Some(if current.field == field {
            current.flipped()
        } else {
            SortKey::asc(field)
        });
        self.page = 1;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }

    /// Moves to `page`, rejecting anything outside `[1, total_pages]`. The
    /// current page is unchanged on rejection.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) -> StoreResult<()> {
        let total_pages = self.total_pages(total_items);
        if page < 1 || page > total_pages {
            return Err(StoreError::PageOutOfRange {
                requested: page,
                total_pages,
            });
        }
        self.page = page;
        Ok(())
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn last_page(&mut self, total_items: usize) {
        self.page = self.total_pages(total_items);
    }

    pub fn next_page(&mut self, total_items: usize) -> StoreResult<()> {
        self.go_to_page(self.page + 1, total_items)
    }

    pub fn prev_page(&mut self, total_items: usize) -> StoreResult<()> {
        self.go_to_page(self.page.saturating_sub(1), total_items)
    }

    /// Filtered and sorted, unpaginated. This is what exports read.
    pub fn matching<'a>(&self, records: &'a [CustomerModel]) -> Vec<&'a CustomerModel> {
        let filtered = filter_records(records, &self.search_term);
        match self.sort {
            Some(key) => sort_records(filtered, key),
            None => filtered,
        }
    }

    pub fn derive<'a>(&self, records: &'a [CustomerModel], max_visible_pages: usize) -> DerivedView<'a> {
        let matching = self.matching(records);
        let page = paginate(&matching, PageRequest::new(self.page, self.page_size));
        let page_numbers = page_window(page.page, page.total_pages(), max_visible_pages);
        DerivedView { page, page_numbers }
    }
}
