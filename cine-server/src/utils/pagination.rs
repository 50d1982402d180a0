//! In-memory pagination
//!
//! Result sets come back from the stored procedures fully fetched;
//! [`paginate`] slices them into a page and computes the metadata the
//! clients use for navigation.

use serde::Serialize;

/// Items per page when the caller asks for less than 1
pub const DEFAULT_PER_PAGE: i64 = 10;
/// Upper bound on items per page
pub const MAX_PER_PAGE: i64 = 100;

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Current page (1-indexed)
    pub page: i64,
    /// Items per page
    pub per_page: i64,
    /// Total number of items
    pub total: i64,
    /// Total number of pages (1 even when empty)
    pub total_pages: i64,
    /// Whether a next page exists
    pub has_next: bool,
    /// Whether a previous page exists
    pub has_prev: bool,
}

/// One page of an ordered result list plus its position metadata
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Paginate a fully-fetched item list.
///
/// Clamping rules:
/// - `per_page < 1` falls back to [`DEFAULT_PER_PAGE`], `> 100` caps at [`MAX_PER_PAGE`]
/// - `page < 1` becomes 1
/// - `page` past the end returns the last page, never an empty error
///
/// An empty list yields `total_pages = 1` with empty data.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: i64) -> Page<T> {
    let per_page = if per_page < 1 {
        DEFAULT_PER_PAGE
    } else if per_page > MAX_PER_PAGE {
        MAX_PER_PAGE
    } else {
        per_page
    };

    let mut page = page.max(1);

    let total = items.len() as i64;
    let total_pages = if total > 0 {
        (total as u64).div_ceil(per_page as u64) as i64
    } else {
        1
    };

    if page > total_pages {
        page = total_pages;
    }

    let start = ((page - 1) * per_page) as usize;
    let data: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    Page {
        data,
        pagination: PaginationInfo {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn test_per_page_clamping() {
        let page = paginate(items(50), 1, 0);
        assert_eq!(page.pagination.per_page, DEFAULT_PER_PAGE);

        let page = paginate(items(50), 1, -3);
        assert_eq!(page.pagination.per_page, DEFAULT_PER_PAGE);

        let page = paginate(items(500), 1, 1000);
        assert_eq!(page.pagination.per_page, MAX_PER_PAGE);
        assert_eq!(page.data.len(), 100);
    }

    #[test]
    fn test_page_clamping() {
        let page = paginate(items(30), -5, 10);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.data, items(10));

        // Past the end: quietly return the last page
        let page = paginate(items(30), 99, 10);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.data, (21..=30).collect::<Vec<_>>());
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_remainder_page_length() {
        let page = paginate(items(25), 3, 10);
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_empty_list() {
        let page = paginate(Vec::<i64>::new(), 1, 10);
        assert!(page.data.is_empty());
        assert_eq!(
            page.pagination,
            PaginationInfo {
                page: 1,
                per_page: 10,
                total: 0,
                total_pages: 1,
                has_next: false,
                has_prev: false,
            }
        );
    }

    #[test]
    fn test_pages_reconstruct_the_list() {
        let all = items(137);
        for per_page in [1, 3, 10, 50, 100] {
            let total_pages = paginate(all.clone(), 1, per_page).pagination.total_pages;
            let mut collected = Vec::new();
            for p in 1..=total_pages {
                let page = paginate(all.clone(), p, per_page);
                assert!(page.data.len() as i64 <= per_page);
                collected.extend(page.data);
            }
            assert_eq!(collected, all, "per_page={per_page}");
        }
    }

    #[test]
    fn test_metadata_flags() {
        let page = paginate(items(30), 2, 10);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
        assert_eq!(page.pagination.total, 30);
        assert_eq!(page.pagination.total_pages, 3);
    }
}
