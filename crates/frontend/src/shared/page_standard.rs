//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_auction--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records: table with search/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Tree view (categories).
pub const PAGE_CAT_TREE: &str = "tree";

/// System administration page (users, roles).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_TREE, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_category--tree"));
        assert!(!is_valid_page_id("a003_category"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_SYSTEM));
        assert!(!is_known_category("dashboard"));
    }
}
