//! Client-side pagination over an in-memory list

/// Items shown per page
pub const PAGE_SIZE: usize = 12;

/// Maximum number of page buttons in the page-number window
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Pages over a list held in memory
///
/// `total_pages` is always `ceil(len / page_size)`. The current page starts
/// at 1 and only moves to pages inside `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Paginator<T> {
    /// Paginate `items` with the standard page size
    pub fn new(items: Vec<T>) -> Self {
        Self::with_page_size(items, PAGE_SIZE)
    }

    /// Paginate with a custom page size (at least 1)
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replace the list; always returns to page 1
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page, 1-based
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Move to `page`; returns false and leaves the page unchanged when
    /// `page` is outside `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Items on the current page
    pub fn page_items(&self) -> &[T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        self.items.get(start..end).unwrap_or_default()
    }

    /// Page numbers to display: at most [`MAX_PAGE_BUTTONS`], centred on the
    /// current page and shifted near either end so the window stays inside
    /// `[1, total_pages]`
    pub fn page_numbers(&self) -> Vec<usize> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }

        let mut start = self.current_page.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
        let end = (start + MAX_PAGE_BUTTONS - 1).min(total);
        if end - start < MAX_PAGE_BUTTONS - 1 {
            start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
        }

        (start..=end).collect()
    }
}
