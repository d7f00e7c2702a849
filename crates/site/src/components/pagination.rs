//! Pagination for admin tables.

/// A page of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, starting at 1.
    pub page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Rows on every page.
    pub per_page: usize,
    /// Rows across all pages.
    pub total_items: usize,
}

impl Pagination {
    /// Clamp `requested` into range for `total_items` rows.
    #[must_use]
    pub fn new(requested: Option<usize>, per_page: usize, total_items: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = requested.unwrap_or(1).clamp(1, total_pages);
        Self {
            page,
            total_pages,
            per_page,
            total_items,
        }
    }

    /// The rows of `items` on this page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub const fn prev_page(&self) -> usize {
        self.page.saturating_sub(1)
    }

    #[must_use]
    pub const fn next_page(&self) -> usize {
        self.page + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_pages() {
        let rows: Vec<u32> = (1..=12).collect();
        let first = Pagination::new(None, 5, rows.len());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.slice(&rows), [1, 2, 3, 4, 5]);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination::new(Some(3), 5, rows.len());
        assert_eq!(last.slice(&rows), [11, 12]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let pagination = Pagination::new(Some(99), 10, 3);
        assert_eq!(pagination.page, 1);

        let empty = Pagination::new(Some(0), 10, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.slice::<u32>(&[]).is_empty());
    }
}
