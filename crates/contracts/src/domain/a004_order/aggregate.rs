use serde::{Deserialize, Serialize};

use crate::domain::a001_store::StoreRef;
use crate::domain::a005_product::{ProductRef, VariantRef};
use crate::enums::ProductionStatus;
use crate::shared::EntityId;

/// Shopify order mirrored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub store: Option<StoreRef>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub delivery_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn number_label(&self) -> String {
        match &self.order_number {
            Some(n) if !n.is_empty() => format!("#{}", n),
            _ => format!("#{}", self.id),
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: EntityId,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub variant: Option<VariantRef>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub units: Vec<OrderUnit>,
}

impl OrderItem {
    pub fn title(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("-")
    }

    pub fn sku(&self) -> &str {
        self.variant
            .as_ref()
            .and_then(|v| v.sku.as_deref())
            .unwrap_or("-")
    }

    pub fn is_pod(&self) -> bool {
        self.product.as_ref().map(|p| p.is_pod).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUnit {
    pub id: EntityId,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub replacement_reason: Option<String>,
}

/// Body of `PATCH /orders/orderItems/:id/status` and
/// `POST /orders/items/:orderId/bulk-status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: ProductionStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_ids: Vec<EntityId>,
}

impl StatusUpdate {
    pub fn new(status: ProductionStatus) -> Self {
        Self {
            status,
            unit_ids: Vec::new(),
        }
    }

    pub fn for_units(status: ProductionStatus, unit_ids: Vec<EntityId>) -> Self {
        Self { status, unit_ids }
    }
}

/// Body of `PATCH /orders/units/:id/replace`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementRequest {
    pub reason: String,
}

impl ReplacementRequest {
    pub fn new(reason: &str) -> Result<Self, String> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err("Please enter a replacement reason".into());
        }
        Ok(Self {
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_partial_payload() {
        let json = r#"{
            "id": 9, "orderNumber": "1042", "store": {"name": "Acme"},
            "totalPrice": 350.5, "status": "WAITING_BATCH",
            "items": [
                {"id": 1, "product": {"title": "Mug", "isPod": true}, "variant": {"sku": "MUG-W"},
                 "quantity": 2, "price": 100.0, "status": "BATCHED"},
                {"id": 2, "quantity": 1, "status": "SOMETHING_NEW"}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.number_label(), "#1042");
        assert_eq!(order.store_name(), "Acme");
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.items[0].sku(), "MUG-W");
        assert!(order.items[0].is_pod());
        assert_eq!(order.items[1].title(), "-");
        assert_eq!(
            order.items[1].status,
            ProductionStatus::Other("SOMETHING_NEW".into())
        );
    }

    #[test]
    fn test_status_update_omits_empty_units() {
        let plain = StatusUpdate::new(ProductionStatus::Printing);
        assert_eq!(serde_json::to_string(&plain).unwrap(), r#"{"status":"PRINTING"}"#);

        let units = StatusUpdate::for_units(ProductionStatus::Cut, vec![EntityId::from(5)]);
        assert_eq!(
            serde_json::to_string(&units).unwrap(),
            r#"{"status":"CUT","unitIds":[5]}"#
        );
    }

    #[test]
    fn test_replacement_reason_required() {
        assert!(ReplacementRequest::new("   ").is_err());
        assert_eq!(ReplacementRequest::new(" misprint ").unwrap().reason, "misprint");
    }
}
