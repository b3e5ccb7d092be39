//! Tab labels: единственный источник правды для заголовков табов.
//!
//! Detail-табы получают временный заголовок по префиксу ключа и
//! переименовываются страницей, когда сущность загружена.

use contracts::system::navigation::*;
use contracts::system::roles::Station;

/// Readable tab title for a key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        TAB_PRODUCTS => "Products",
        TAB_ORDERS => "Orders",
        TAB_BATCHES => "Batches",
        TAB_STOCK => "Stock",
        k if k.starts_with(TAB_ORDER_DETAIL_PREFIX) => "Order",
        k if k.starts_with(TAB_BATCH_DETAIL_PREFIX) => "Batch",
        k if k.starts_with(TAB_STOCK_DETAIL_PREFIX) => "Stock",

        // ── Registers (p9xx) ──────────────────────────────────────────────
        TAB_RETURNS => "Returns",

        // ── Stations (u5xx) ───────────────────────────────────────────────
        k if Station::from_tab_key(k).is_some() => {
            Station::from_tab_key(k).map(|s| s.title()).unwrap_or_default()
        }

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        TAB_DASHBOARD => "Dashboard",

        // ── System ────────────────────────────────────────────────────────
        TAB_PROFILE => "My account",

        _ => "",
    }
}

/// First non-empty identifier, else the id.
pub fn pick_identifier<'a>(name: Option<&'a str>, number: Option<&'a str>, id: &'a str) -> &'a str {
    [name, number]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(id)
}

/// Detail tab title: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_for_fixed_keys() {
        assert_eq!(tab_label_for_key(TAB_DASHBOARD), "Dashboard");
        assert_eq!(tab_label_for_key(TAB_SCAN_CUTTER), "Cutter Scanner");
        assert_eq!(tab_label_for_key(&batch_detail_key("7")), "Batch");
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_detail_label() {
        assert_eq!(
            detail_tab_label("Batch", pick_identifier(Some(" "), None, "12")),
            "Batch · 12"
        );
        assert_eq!(pick_identifier(None, Some("#1001"), "5"), "#1001");
    }
}
