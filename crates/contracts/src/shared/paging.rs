use serde::{Deserialize, Serialize};

/// `{ data, page, pages }` envelope used by `/orders`, `/batches`, `/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            page: 1,
            pages: 1,
            total: None,
        }
    }
}

impl<T> PagedResponse<T> {
    /// Backend reports `pages: 0` for an empty result set.
    pub fn page_count(&self) -> u32 {
        self.pages.max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

/// Pagination block of the `{ data, pagination }` envelope.
///
/// Returns answer `{ total, page, limit, totalPages }`; main stock products
/// answer `{ totalItems, currentPage, totalPages, hasNextPage, hasPreviousPage }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "totalItems")]
    pub total: u64,
    #[serde(default = "first_page", alias = "currentPage")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_previous_page: Option<bool>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: 0,
            total_pages: 1,
            has_next_page: None,
            has_previous_page: None,
        }
    }
}

/// `{ data, pagination }` envelope used by returns and main stock products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn page_count(&self) -> u32 {
        self.pagination.total_pages.max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.pagination
            .has_previous_page
            .unwrap_or(self.pagination.page > 1)
    }

    pub fn has_next(&self) -> bool {
        self.pagination
            .has_next_page
            .unwrap_or(self.pagination.page < self.page_count())
    }
}

/// A list endpoint that answers either `[...]` or `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped { data } => data,
        }
    }
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_response_navigation() {
        let resp: PagedResponse<u32> =
            serde_json::from_str(r#"{"data":[1,2],"page":1,"pages":3}"#).unwrap();
        assert!(!resp.has_prev());
        assert!(resp.has_next());

        let last: PagedResponse<u32> =
            serde_json::from_str(r#"{"data":[],"page":1,"pages":0}"#).unwrap();
        assert_eq!(last.page_count(), 1);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginated_response_camel_case() {
        let resp: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"data":[5],"pagination":{"total":41,"page":2,"limit":20,"totalPages":3}}"#,
        )
        .unwrap();
        assert_eq!(resp.pagination.total, 41);
        assert!(resp.has_prev());
        assert!(resp.has_next());
    }

    #[test]
    fn test_paginated_response_stock_shape() {
        let resp: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"data":[],"pagination":{"totalItems":12,"currentPage":1,"totalPages":2,"hasNextPage":false,"hasPreviousPage":false}}"#,
        )
        .unwrap();
        assert_eq!(resp.pagination.total, 12);
        assert_eq!(resp.pagination.page, 1);
        assert!(!resp.has_next());
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let bare: Listing<u32> = serde_json::from_str("[1,2]").unwrap();
        let wrapped: Listing<u32> = serde_json::from_str(r#"{"data":[3]}"#).unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2]);
        assert_eq!(wrapped.into_vec(), vec![3]);
    }
}
