//! Manual cache invalidation for tab pages.
//!
//! Pages read `cache.version(key)` inside their load effect; a mutation
//! calls `cache.invalidate(key)` and every page tracking that key refetches.

use leptos::prelude::*;
use std::collections::HashMap;

pub const Q_STORES: &str = "stores";
pub const Q_RULES: &str = "rules";
pub const Q_PRODUCTS: &str = "products";
pub const Q_ORDERS: &str = "orders";
pub const Q_ORDER: &str = "order";
pub const Q_BATCHES: &str = "batches";
pub const Q_BATCH: &str = "batch";
pub const Q_BATCH_FILES: &str = "batchFiles";
pub const Q_MAIN_STOCK: &str = "mainStock";
pub const Q_MAIN_STOCK_PRODUCTS: &str = "mainStockProducts";
pub const Q_STOCK_ITEMS: &str = "stockItems";
pub const Q_DASHBOARD: &str = "dashboard";

#[derive(Clone, Copy)]
pub struct QueryCache {
    versions: RwSignal<HashMap<&'static str, u64>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(HashMap::new()),
        }
    }

    /// Tracked read; use inside effects that should refetch on invalidation.
    pub fn version(&self, key: &'static str) -> u64 {
        self.versions
            .with(|versions| versions.get(key).copied().unwrap_or(0))
    }

    pub fn invalidate(&self, key: &'static str) {
        log::debug!("cache invalidated: {}", key);
        self.versions.update(|versions| {
            *versions.entry(key).or_insert(0) += 1;
        });
    }

    pub fn invalidate_many(&self, keys: &[&'static str]) {
        self.versions.update(|versions| {
            for key in keys {
                *versions.entry(*key).or_insert(0) += 1;
            }
        });
    }

    /// Bumps every known key; called on logout.
    pub fn reset(&self) {
        self.versions.update(|versions| {
            for version in versions.values_mut() {
                *version += 1;
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not found in context")
}

/// Counter that lets a load effect drop responses of superseded requests.
#[derive(Clone, Copy)]
pub struct RequestSeq(StoredValue<u64>);

impl RequestSeq {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Starts a request and returns its number.
    pub fn begin(&self) -> u64 {
        let seq = self.0.get_value() + 1;
        self.0.set_value(seq);
        seq
    }

    /// False once a later request has started.
    pub fn is_current(&self, seq: u64) -> bool {
        self.0.get_value() == seq
    }
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_bumps_version() {
        let cache = QueryCache::new();
        assert_eq!(cache.version(Q_BATCH), 0);
        cache.invalidate_many(&[Q_BATCH, Q_ORDER]);
        cache.invalidate(Q_BATCH);
        assert_eq!(cache.version(Q_BATCH), 2);
        assert_eq!(cache.version(Q_ORDER), 1);
    }
}
