//! Page index and page size for a table view.
//!
//! Page sizes are restricted to the rows-per-page choices the dashboard
//! offers (5, 10, 25). Changing the page size always returns to the first
//! page.

use std::ops::Range;
use thiserror::Error;

/// Rows-per-page choices, in cycling order.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page size must be one of 5, 10 or 25 (got {0})")]
pub struct PageSizeError(pub usize);

/// Validate a page size coming from config or the command line.
pub fn check_page_size(size: usize) -> Result<usize, PageSizeError> {
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(PageSizeError(size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, PageSizeError> {
        Ok(Self {
            page: 0,
            page_size: check_page_size(page_size)?,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` rows. An empty list still has one
    /// (empty) page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Slice bounds of the current page within a list of `len` rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn is_last_page(&self, len: usize) -> bool {
        self.page + 1 >= self.page_count(len)
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next_page(&mut self, len: usize) -> bool {
        if self.is_last_page(len) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn last_page(&mut self, len: usize) {
        self.page = self.page_count(len) - 1;
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), PageSizeError> {
        self.page_size = check_page_size(size)?;
        self.page = 0;
        Ok(())
    }

    /// Step to the next rows-per-page choice, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|s| *s == self.page_size)
            .unwrap_or(0);
        self.page_size = PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()];
        self.page = 0;
    }

    /// Footer text in the usual `1–10 of 12` form.
    pub fn label(&self, len: usize) -> String {
        let range = self.range(len);
        if range.is_empty() {
            format!("0–0 of {}", len)
        } else {
            format!("{}–{} of {}", range.start + 1, range.end, len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_first_page_of_ten() {
        let p = Paginator::default();
        assert_eq!(p.page(), 0);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.range(12), 0..10);
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        assert_eq!(Paginator::new(7), Err(PageSizeError(7)));
        assert!(Paginator::new(25).is_ok());
        assert_eq!(check_page_size(0), Err(PageSizeError(0)));
    }

    #[test]
    fn test_next_and_prev_clamp() {
        let mut p = Paginator::new(5).unwrap();
        assert!(p.next_page(12));
        assert!(p.next_page(12));
        assert!(!p.next_page(12));
        assert_eq!(p.page(), 2);
        assert_eq!(p.range(12), 10..12);
        assert!(p.prev_page());
        assert!(p.prev_page());
        assert!(!p.prev_page());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Paginator::new(5).unwrap();
        p.next_page(30);
        p.cycle_page_size();
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.page(), 0);
        p.cycle_page_size();
        assert_eq!(p.page_size(), 25);
        p.cycle_page_size();
        assert_eq!(p.page_size(), 5);

        p.next_page(30);
        p.set_page_size(25).unwrap();
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let p = Paginator::default();
        assert_eq!(p.page_count(0), 1);
        assert!(p.range(0).is_empty());
        assert_eq!(p.label(0), "0–0 of 0");
    }

    #[test]
    fn test_label() {
        let mut p = Paginator::default();
        assert_eq!(p.label(12), "1–10 of 12");
        p.next_page(12);
        assert_eq!(p.label(12), "11–12 of 12");
    }

    proptest! {
        #[test]
        fn last_page_row_count(len in 1usize..400, size_idx in 0usize..3) {
            let size = PAGE_SIZES[size_idx];
            let mut p = Paginator::new(size).unwrap();
            p.last_page(len);
            let rows = p.range(len).len();
            let expected = if len % size == 0 { size } else { len % size };
            prop_assert_eq!(rows, expected);
        }

        #[test]
        fn pages_cover_every_row_once(len in 0usize..200, size_idx in 0usize..3) {
            let mut p = Paginator::new(PAGE_SIZES[size_idx]).unwrap();
            let mut seen = 0;
            loop {
                let r = p.range(len);
                prop_assert_eq!(r.start, seen);
                seen = r.end;
                if !p.next_page(len) {
                    break;
                }
            }
            prop_assert_eq!(seen, len);
        }
    }
}
