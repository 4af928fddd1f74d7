//! Client-side pagination over an already filtered list. Pages are 1-indexed.

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` items. Zero items still yield one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Clamps a requested page into `1..=page_count`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Items of `page` (1-indexed). Out of range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Pagination controls only appear once the list overflows a single page.
pub fn needs_pagination(total: usize, page_size: usize) -> bool {
    total > page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_controls_visibility() {
        assert!(!needs_pagination(10, DEFAULT_PAGE_SIZE));
        assert!(needs_pagination(11, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_clamp_page_after_filter_shrinks() {
        assert_eq!(clamp_page(3, 12, 10), 2);
        assert_eq!(clamp_page(0, 12, 10), 1);
    }
}
