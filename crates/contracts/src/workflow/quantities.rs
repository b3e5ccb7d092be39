use std::collections::HashMap;

use crate::domain::a006_main_stock::{MainStockProduct, QuantityAssignment};

/// Per-SKU quantity edit buffer of the main stock products table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityDraft {
    server: Vec<(String, i64)>,
    drafts: HashMap<String, i64>,
}

impl QuantityDraft {
    pub fn seed(products: &[MainStockProduct]) -> Self {
        Self {
            server: products
                .iter()
                .map(|p| (p.sku.clone(), p.quantity()))
                .collect(),
            drafts: HashMap::new(),
        }
    }

    /// Negative input clamps to 0, unparsable input counts as 0.
    pub fn parse_quantity(raw: &str) -> i64 {
        let raw = raw.trim();
        let value = raw
            .parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
            .unwrap_or(0);
        value.max(0)
    }

    pub fn set(&mut self, sku: &str, raw: &str) {
        self.drafts.insert(sku.to_string(), Self::parse_quantity(raw));
    }

    fn server_value(&self, sku: &str) -> Option<i64> {
        self.server.iter().find(|(s, _)| s == sku).map(|(_, q)| *q)
    }

    pub fn value(&self, sku: &str) -> i64 {
        self.drafts
            .get(sku)
            .copied()
            .or_else(|| self.server_value(sku))
            .unwrap_or(0)
    }

    pub fn is_changed(&self, sku: &str) -> bool {
        self.value(sku) != self.server_value(sku).unwrap_or(0)
    }

    /// SKUs whose draft differs from the server, in table order.
    pub fn changed(&self) -> Vec<String> {
        self.server
            .iter()
            .filter(|(sku, _)| self.is_changed(sku))
            .map(|(sku, _)| sku.clone())
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.server.iter().any(|(sku, _)| self.is_changed(sku))
    }

    pub fn assignment(&self, sku: &str) -> QuantityAssignment {
        QuantityAssignment {
            sku: sku.to_string(),
            quantity: self.value(sku),
        }
    }

    pub fn bulk_assignments(&self) -> Vec<QuantityAssignment> {
        self.changed().iter().map(|sku| self.assignment(sku)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, qty: Option<i64>) -> MainStockProduct {
        MainStockProduct {
            sku: sku.into(),
            total_quantity: qty,
            product_img_url: None,
            product_name: None,
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(QuantityDraft::parse_quantity("12"), 12);
        assert_eq!(QuantityDraft::parse_quantity("-3"), 0);
        assert_eq!(QuantityDraft::parse_quantity("abc"), 0);
        assert_eq!(QuantityDraft::parse_quantity("4.9"), 4);
        assert_eq!(QuantityDraft::parse_quantity(""), 0);
    }

    #[test]
    fn test_changed_and_bulk() {
        let mut draft = QuantityDraft::seed(&[product("A", Some(5)), product("B", None), product("C", Some(1))]);
        assert!(!draft.has_changes());
        assert_eq!(draft.value("B"), 0);

        draft.set("A", "7");
        draft.set("B", "0");
        draft.set("C", "-1");
        assert_eq!(draft.changed(), vec!["A".to_string(), "C".to_string()]);
        assert_eq!(
            draft.bulk_assignments(),
            vec![
                QuantityAssignment { sku: "A".into(), quantity: 7 },
                QuantityAssignment { sku: "C".into(), quantity: 0 },
            ]
        );

        draft.set("A", "5");
        assert!(!draft.is_changed("A"));
    }
}
