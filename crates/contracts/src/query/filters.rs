use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{default_limit, first_page, is_blank, to_query_string, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilters {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub store_id: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub status: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub search: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub end_date: String,
}

impl Default for OrderFilters {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            store_id: String::new(),
            status: String::new(),
            search: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl OrderFilters {
    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

// ============================================================================
// Batches
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFilters {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub rule_name: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub status: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub search: String,
}

impl Default for BatchFilters {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            rule_name: String::new(),
            status: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            search: String::new(),
        }
    }
}

impl BatchFilters {
    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub store_id: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub product_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pod: Option<bool>,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            store_id: String::new(),
            product_type: String::new(),
            is_pod: None,
        }
    }
}

impl ProductFilters {
    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

// ============================================================================
// Rules
// ============================================================================

/// `isPod` / `requiresStock` filter of the rule lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pod: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_stock: Option<bool>,
}

impl RuleFilters {
    /// Rules offered when creating or editing a batch.
    pub fn pod_only() -> Self {
        Self {
            is_pod: Some(true),
            requires_stock: None,
        }
    }

    /// Rules offered when creating a main stock.
    pub fn stock_candidates() -> Self {
        Self {
            is_pod: Some(false),
            requires_stock: Some(false),
        }
    }

    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

// ============================================================================
// Returns
// ============================================================================

/// Returns filters. The page keeps two copies: the pending one bound to the
/// inputs and the applied one that drives the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnFilters {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub store_id: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub product_type: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub end_date: String,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ReturnFilters {
    fn default() -> Self {
        Self {
            store_id: String::new(),
            product_type: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReturnFilters {
    /// Copies the pending inputs and goes back to the first page.
    pub fn apply(&mut self, pending: &ReturnFilters) {
        *self = ReturnFilters {
            page: 1,
            limit: normalize_page_size(pending.limit),
            ..pending.clone()
        };
    }

    pub fn reset(&mut self) {
        *self = ReturnFilters::default();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

/// Snaps an arbitrary page size to one of the offered options.
pub fn normalize_page_size(limit: u32) -> u32 {
    if PAGE_SIZE_OPTIONS.contains(&limit) {
        limit
    } else {
        DEFAULT_PAGE_SIZE
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub store_id: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub end_date: String,
}

impl DashboardFilters {
    /// Dates come from `<input type="date">`, so `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), String> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err("Start date must be before end date".into());
            }
        }
        Ok(())
    }

    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date: {}", raw))
}

// ============================================================================
// Main stock products
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainStockProductFilters {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub sku: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub title: String,
}

impl Default for MainStockProductFilters {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sku: String::new(),
            title: String::new(),
        }
    }
}

impl MainStockProductFilters {
    pub fn to_query_string(&self) -> String {
        to_query_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_omitted() {
        let filters = BatchFilters {
            limit: 10,
            rule_name: "T-Shirt".into(),
            status: "  ".into(),
            ..BatchFilters::default()
        };
        assert_eq!(filters.to_query_string(), "page=1&limit=10&ruleName=T-Shirt");
    }

    #[test]
    fn test_order_filters_query() {
        let filters = OrderFilters {
            page: 3,
            store_id: "5".into(),
            search: "1042".into(),
            ..OrderFilters::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "page=3&limit=20&storeId=5&search=1042"
        );
    }

    #[test]
    fn test_rule_filters_query() {
        assert_eq!(RuleFilters::pod_only().to_query_string(), "isPod=true");
        assert_eq!(
            RuleFilters::stock_candidates().to_query_string(),
            "isPod=false&requiresStock=false"
        );
        assert_eq!(RuleFilters::default().to_query_string(), "");
    }

    #[test]
    fn test_return_filters_apply_and_reset() {
        let mut applied = ReturnFilters::default();
        applied.go_to_page(4);

        let pending = ReturnFilters {
            product_type: "ACRYLIC KEYCHAINS".into(),
            limit: 50,
            page: 9,
            ..ReturnFilters::default()
        };
        applied.apply(&pending);
        assert_eq!(applied.page, 1);
        assert_eq!(applied.limit, 50);
        assert_eq!(applied.product_type, "ACRYLIC KEYCHAINS");

        let odd = ReturnFilters {
            limit: 33,
            ..ReturnFilters::default()
        };
        applied.apply(&odd);
        assert_eq!(applied.limit, 20);

        applied.reset();
        assert_eq!(applied, ReturnFilters::default());
    }

    #[test]
    fn test_dashboard_date_validation() {
        let mut filters = DashboardFilters {
            start_date: "2024-05-10".into(),
            end_date: "2024-05-01".into(),
            ..DashboardFilters::default()
        };
        assert!(filters.validate().is_err());
        filters.end_date = "2024-06-01".into();
        assert!(filters.validate().is_ok());
        filters.start_date = "10/05/2024".into();
        assert_eq!(filters.validate(), Err("Invalid date: 10/05/2024".to_string()));
        assert_eq!(DashboardFilters::default().to_query_string(), "");
    }

    #[test]
    fn test_main_stock_product_filters() {
        let filters = MainStockProductFilters {
            sku: "MUG".into(),
            ..MainStockProductFilters::default()
        };
        assert_eq!(filters.to_query_string(), "page=1&limit=10&sku=MUG");
    }
}
