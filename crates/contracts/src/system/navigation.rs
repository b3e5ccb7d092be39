//! Tab keys of the console.
//!
//! Prefixes follow the usual layout: `aNNN_` aggregates, `pNNN_` read-only
//! registers, `uNNN_` operator use cases, `dNNN_` dashboards, `sys_` system pages.

pub const TAB_DASHBOARD: &str = "d400_dashboard";
pub const TAB_PRODUCTS: &str = "a005_product";
pub const TAB_ORDERS: &str = "a004_order";
pub const TAB_ORDER_DETAIL_PREFIX: &str = "a004_order_detail_";
pub const TAB_BATCHES: &str = "a003_batch";
pub const TAB_BATCH_DETAIL_PREFIX: &str = "a003_batch_detail_";
pub const TAB_STOCK: &str = "a006_main_stock";
pub const TAB_STOCK_DETAIL_PREFIX: &str = "a006_main_stock_detail_";
pub const TAB_RETURNS: &str = "p900_returns";
pub const TAB_SCAN_PRINTER: &str = "u501_scan_printer";
pub const TAB_SCAN_CUTTER: &str = "u502_scan_cutter";
pub const TAB_SCAN_FULFILLMENT: &str = "u503_scan_fulfillment";
pub const TAB_PROFILE: &str = "sys_profile";

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl MenuEntry {
    pub const fn new(key: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { key, label, icon }
    }
}

pub fn order_detail_key(id: &str) -> String {
    format!("{}{}", TAB_ORDER_DETAIL_PREFIX, id)
}

pub fn batch_detail_key(id: &str) -> String {
    format!("{}{}", TAB_BATCH_DETAIL_PREFIX, id)
}

pub fn stock_detail_key(id: &str) -> String {
    format!("{}{}", TAB_STOCK_DETAIL_PREFIX, id)
}
