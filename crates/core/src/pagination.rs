//! Page/limit pagination arithmetic shared by every list endpoint.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer and the repository layer.

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of records per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a requested page number to `>= 1`. `None` means page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested limit into `1..=MAX_PAGE_LIMIT`. `None` means the default.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// SQL OFFSET for a 1-based page.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Total page count: `ceil(total / limit)`. Zero rows means zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_page ----------------------------------------------------------

    #[test]
    fn clamp_page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
    }

    #[test]
    fn clamp_page_rejects_zero_and_negative() {
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-5)), 1);
        assert_eq!(clamp_page(Some(3)), 3);
    }

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn clamp_limit_caps_at_max() {
        assert_eq!(clamp_limit(Some(10_000)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(25)), 25);
    }

    // -- offset_for ----------------------------------------------------------

    #[test]
    fn offset_is_zero_for_first_page() {
        assert_eq!(offset_for(1, 10), 0);
        assert_eq!(offset_for(3, 10), 20);
    }

    // -- total_pages ---------------------------------------------------------

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }
}
