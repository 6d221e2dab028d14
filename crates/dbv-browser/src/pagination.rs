//! Windowed view over an in-memory list.

use std::ops::Range;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 20;

/// Page offset over a list of `total` items.
///
/// The offset never starts a window past `max(0, total - page_size)` when
/// advanced through [`Pagination::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    offset: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    /// Create a pagination at offset 0. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index range of the visible slice.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = (self.offset + self.page_size).min(total);
        start..end
    }

    /// Whether "Next" is enabled.
    pub fn has_next(&self, total: usize) -> bool {
        self.offset + self.page_size < total
    }

    /// Whether "Previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Advance one page. No-op at the last page.
    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.offset = (self.offset + self.page_size).min(total.saturating_sub(self.page_size));
        }
    }

    /// Go back one page. No-op at the first page.
    pub fn previous(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Header text such as `21-40 of 45`.
    pub fn range_label(&self, total: usize) -> String {
        let window = self.window(total);
        if window.is_empty() {
            format!("0-0 of {total}")
        } else {
            format!("{}-{} of {total}", window.start + 1, window.end)
        }
    }
}
