//! List filters serialized into query strings.
//!
//! Empty strings and `None` never reach the wire: the backend treats
//! `?status=` as a filter on the empty status.

mod filters;

pub use filters::*;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Serializes a filter struct, returning an empty string on failure.
pub fn to_query_string<T: serde::Serialize>(filters: &T) -> String {
    serde_qs::to_string(filters).unwrap_or_default()
}

