//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{tab key}--{category}` (e.g. `"a003_batch--list"`) and a
//! `data-page-category` taken from the constants below.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Cards and summary tables.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Operator station (scanner pages).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account and session pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `{entity}--{category}` with both halves present.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_batch--list"));
        assert!(!is_valid_page_id("a003_batch"));
        assert!(!is_valid_page_id("--list"));
    }
}
