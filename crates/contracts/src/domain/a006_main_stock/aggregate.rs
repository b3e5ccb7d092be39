use serde::{Deserialize, Serialize};

use crate::domain::a001_store::StoreRef;
use crate::shared::EntityId;

/// Shared stock pool fed by one or more non-POD rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainStock {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub rules: Vec<MainStockRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainStockRule {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub store: Option<StoreRef>,
}

impl MainStockRule {
    pub fn label(&self) -> String {
        match self.variant_title.as_deref() {
            Some(v) if !v.is_empty() => format!("{} - {}", self.name, v),
            _ => self.name.clone(),
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }
}

/// Body of `POST /admin/mainStock` and `PUT /admin/mainStock/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMainStock {
    pub name: String,
    pub rule_ids: Vec<EntityId>,
}

impl NewMainStock {
    pub fn validate(name: &str, rule_ids: &[EntityId]) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Please enter a name for the main stock".into());
        }
        if rule_ids.is_empty() {
            return Err("Select at least one rule to include".into());
        }
        Ok(Self {
            name: name.to_string(),
            rule_ids: rule_ids.to_vec(),
        })
    }
}

/// Row of `GET /admin/mainStock/:id/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainStockProduct {
    pub sku: String,
    #[serde(default)]
    pub total_quantity: Option<i64>,
    #[serde(default)]
    pub product_img_url: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl MainStockProduct {
    pub fn quantity(&self) -> i64 {
        self.total_quantity.unwrap_or(0)
    }
}

/// Body of `POST /admin/mainStock/:id/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityAssignment {
    pub sku: String,
    pub quantity: i64,
}

/// Row of `GET /admin/mainStock/:id/quantities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuantity {
    pub sku: String,
    #[serde(default)]
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_main_stock_validation() {
        let ids = vec![EntityId::from("r1")];
        assert_eq!(
            NewMainStock::validate("  ", &ids),
            Err("Please enter a name for the main stock".to_string())
        );
        assert_eq!(
            NewMainStock::validate("Blanks", &[]),
            Err("Select at least one rule to include".to_string())
        );
        let ok = NewMainStock::validate(" Blanks ", &ids).unwrap();
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"name":"Blanks","ruleIds":["r1"]}"#
        );
    }

    #[test]
    fn test_main_stock_decodes() {
        let stock: MainStock = serde_json::from_str(
            r#"{"id":1,"name":"Mugs","quantity":40,"rules":[{"id":2,"name":"Mug","variantTitle":"White","store":{"name":"Acme"}}]}"#,
        )
        .unwrap();
        assert_eq!(stock.rules[0].label(), "Mug - White");
        assert_eq!(stock.rules[0].store_name(), "Acme");

        let product: MainStockProduct = serde_json::from_str(r#"{"sku":"MUG-W"}"#).unwrap();
        assert_eq!(product.quantity(), 0);
    }
}
