//! Pagination Math
//!
//! Pages are 1-based. An empty list still has one (empty) page.

use std::ops::Range;

/// Page sizes offered by the "Show" selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Clamp a requested page (possibly zero or negative) into `[1, total]`.
pub fn clamp_page(requested: i64, total: usize) -> usize {
    let total = total.max(1);
    if requested < 1 {
        1
    } else {
        (requested as u64).min(total as u64) as usize
    }
}

/// Index range of `page` within a list of `len` items.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_clamp_page_boundaries() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-4, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(i64::MAX, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_last_page_range() {
        assert_eq!(page_range(3, 10, 23), 20..23);
        assert_eq!(page_range(1, 10, 23), 0..10);
        assert_eq!(page_range(4, 10, 23), 23..23);
        assert_eq!(page_range(1, 10, 0), 0..0);
    }
}
