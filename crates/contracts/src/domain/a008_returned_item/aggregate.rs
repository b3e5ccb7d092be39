use serde::{Deserialize, Serialize};

use crate::domain::a001_store::StoreRef;
use crate::domain::a005_product::{ProductRef, VariantRef};
use crate::shared::EntityId;

/// Row of `GET /admin/returns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnedItem {
    pub id: EntityId,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order: Option<ReturnOrderRef>,
    #[serde(default)]
    pub order_id: Option<EntityId>,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub variant: Option<VariantRef>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub store: Option<StoreRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnOrderRef {
    #[serde(default)]
    pub order_number: Option<String>,
}

impl ReturnedItem {
    /// Order number, falling back to the raw order id.
    pub fn order_label(&self) -> String {
        self.order
            .as_ref()
            .and_then(|o| o.order_number.clone())
            .or_else(|| self.order_id.as_ref().map(|id| id.to_string()))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn store_name(&self) -> &str {
        self.store
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("-")
    }

    pub fn image(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.img_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_label_fallback() {
        let with_number: ReturnedItem = serde_json::from_str(
            r#"{"id":1,"order":{"orderNumber":"1001"},"orderId":55,"quantity":1}"#,
        )
        .unwrap();
        assert_eq!(with_number.order_label(), "1001");

        let only_id: ReturnedItem =
            serde_json::from_str(r#"{"id":2,"orderId":55,"quantity":3}"#).unwrap();
        assert_eq!(only_id.order_label(), "55");
        assert_eq!(only_id.store_name(), "-");
        assert_eq!(only_id.image(), None);
    }
}
