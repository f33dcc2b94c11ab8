//! Client-side paging of the result table.

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }

    /// Rows of the current page; empty past the end.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.page_size).min(rows.len());
        let end = start.saturating_add(self.page_size).min(rows.len());
        &rows[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn next(self, total: usize) -> Self {
        if self.has_next(total) {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    /// "11–20 de 57"
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0 de 0".to_string();
        }
        let first = (self.page * self.page_size + 1).min(total);
        let last = ((self.page + 1) * self.page_size).min(total);
        format!("{first}–{last} de {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_of_ten() {
        let rows: Vec<usize> = (1..=23).collect();
        let first = Pagination::default();
        assert_eq!(first.page_count(rows.len()), 3);
        assert_eq!(first.slice(&rows), &rows[0..10]);
        let last = first.next(rows.len()).next(rows.len());
        assert_eq!(last.slice(&rows), &[21, 22, 23]);
        assert!(!last.has_next(rows.len()));
        assert_eq!(last.next(rows.len()), last);
        assert_eq!(last.range_label(rows.len()), "21–23 de 23");
    }

    #[test]
    fn past_the_end_is_empty() {
        let rows = [1, 2, 3];
        let page = Pagination { page: 5, page_size: 10 };
        assert!(page.slice(&rows).is_empty());
        assert_eq!(Pagination::default().previous().page, 0);
        assert_eq!(Pagination::default().range_label(0), "0 de 0");
    }
}
