use serde::{Deserialize, Serialize};

use crate::domain::a001_store::StoreRef;
use crate::shared::EntityId;

/// Product synced from a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub is_pod: bool,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub store: Option<StoreRef>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    pub fn store_name(&self) -> &str {
        self.store.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }

    pub fn handling_label(&self) -> &'static str {
        if self.is_pod {
            "POD"
        } else {
            "Stock"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: EntityId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Product fields embedded into order items and returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub is_pod: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantRef {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let p: Product = serde_json::from_str(r#"{"id":"abc","title":"Poster"}"#).unwrap();
        assert_eq!(p.id, EntityId::from("abc"));
        assert_eq!(p.store_name(), "-");
        assert_eq!(p.handling_label(), "Stock");
        assert!(p.variants.is_empty());
    }
}
