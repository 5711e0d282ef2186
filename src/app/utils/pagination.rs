// SPDX-License-Identifier: GPL-3.0-only

use std::ops::Range;

use crate::utils::chunk_count;

/// Default number of Pokémon per page
pub const PAGE_SIZE: usize = 10;

/// Page numbers shown between the first and the last page
const CENTER_PAGES: usize = 3;

/// Identifies an action related to Pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Next,
    Back,
}

/// Page bookkeeping for a list of `total` items. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Paginator {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            page_size: PAGE_SIZE,
            page: 1,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.page = self.page.min(self.total_pages());
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Never less than 1, so an empty list still has a page to show
    pub fn total_pages(&self) -> usize {
        chunk_count(self.total, self.page_size).max(1)
    }

    /// Changes the item count and goes back to the first page
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Moves one page, doing nothing when already at that end
    pub fn paginate(&mut self, action: PaginationAction) {
        match action {
            PaginationAction::Next if self.can_go_next() => self.page += 1,
            PaginationAction::Back if self.can_go_back() => self.page -= 1,
            _ => {}
        }
    }

    /// Jumps to `page`, clamped to the existing pages
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Page numbers to offer: the first page, up to three around the current
    /// one and the last page, ascending and without repeats
    pub fn window(&self) -> Vec<usize> {
        let total_pages = self.total_pages();

        let center = if total_pages <= 5 {
            2..total_pages
        } else if self.page <= 3 {
            2..5
        } else if self.page >= total_pages - 2 {
            total_pages - CENTER_PAGES..total_pages
        } else {
            let start = self.page - CENTER_PAGES / 2;
            start..start + CENTER_PAGES
        };

        let mut pages = vec![1];
        pages.extend(center);
        if total_pages > 1 {
            pages.push(total_pages);
        }
        pages
    }

    /// Index range of the current page's items
    pub fn slice_bounds(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    /// The current page's items out of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let bounds = self.slice_bounds();
        let end = bounds.end.min(items.len());
        &items[bounds.start.min(end)..end]
    }
}
