//! Fixed-size pages over the displayed rows.

use vgs_model::Game;

/// Rows per page in the table view.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// One page of rows. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView<'a> {
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
    /// 1-based position of the first row on this page; 0 when there are no rows.
    pub first_row: usize,
    pub rows: &'a [Game],
}

impl PageView<'_> {
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based position of the last row on this page; 0 when empty.
    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.first_row + self.rows.len() - 1
        }
    }
}

/// Number of pages needed for `total` rows; never less than 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slice out page `page` (1-based), clamped into `1..=page_count`.
pub fn paginate(rows: &[Game], page_size: usize, page: usize) -> PageView<'_> {
    let page_size = page_size.max(1);
    let page_count = page_count(rows.len(), page_size);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    let slice = rows.get(start..end).unwrap_or(&[]);
    PageView {
        page,
        page_count,
        total_rows: rows.len(),
        first_row: if slice.is_empty() { 0 } else { start + 1 },
        rows: slice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games(count: usize) -> Vec<Game> {
        (0..count)
            .map(|idx| Game {
                id: Some(idx as i64 + 1),
                name: format!("Game {idx}"),
                platform: "PC".to_string(),
                year: "2000".to_string(),
                genre: "Action".to_string(),
                publisher: "Valve".to_string(),
                global_sales: 1.0,
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 15), 1);
        assert_eq!(page_count(15, 15), 1);
        assert_eq!(page_count(16, 15), 2);
        assert_eq!(page_count(31, 15), 3);
    }

    #[test]
    fn last_page_is_partial() {
        let rows = games(32);
        let view = paginate(&rows, 15, 3);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.first_row, 31);
        assert_eq!(view.last_row(), 32);
        assert!(!view.has_next());
        assert!(view.has_prev());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let rows = games(20);
        assert_eq!(paginate(&rows, 15, 0).page, 1);
        let view = paginate(&rows, 15, 99);
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn empty_rows_give_single_empty_page() {
        let view = paginate(&[], 15, 4);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.first_row, 0);
        assert_eq!(view.last_row(), 0);
        assert!(view.rows.is_empty());
    }
}
