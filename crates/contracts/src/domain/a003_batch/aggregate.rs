use serde::{Deserialize, Serialize};

use crate::enums::ProductionStatus;
use crate::shared::EntityId;

/// Batches above this fill ratio are drawn as "nearly full".
pub const NEARLY_FULL_RATIO: f64 = 0.8;

// ============================================================================
// Batch
// ============================================================================

/// Batch as returned by `/batches` (list) and `/batches/:id` (detail).
///
/// The list endpoint fills the flat item fields used for the Excel export,
/// the detail endpoint fills `total_units` and `units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub max_capacity: u32,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub items: Vec<BatchItem>,
}

impl Batch {
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Batch {}", self.id),
        }
    }

    /// `capacity / maxCapacity`, 0 when the batch has no limit set.
    pub fn fill_ratio(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        self.capacity as f64 / self.max_capacity as f64
    }

    /// Fill percentage for the capacity bar, clamped to 0..=100.
    pub fn fill_percent(&self) -> f64 {
        (self.fill_ratio() * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_nearly_full(&self) -> bool {
        self.fill_ratio() > NEARLY_FULL_RATIO
    }

    pub fn is_full(&self) -> bool {
        self.max_capacity > 0 && self.capacity >= self.max_capacity
    }

    pub fn has_qr(&self) -> bool {
        self.qr_code_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn total_units(&self) -> u32 {
        self.items.iter().map(BatchItem::unit_count).sum()
    }
}

/// One order item placed into a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub quantity_in_batch: u32,
    #[serde(default)]
    pub total_units: Option<u32>,
    #[serde(default)]
    pub units: Vec<BatchUnit>,
}

impl BatchItem {
    pub fn unit_count(&self) -> u32 {
        self.total_units.unwrap_or(self.units.len() as u32)
    }

    fn first_unit(&self) -> Option<&BatchUnit> {
        self.units.first()
    }

    pub fn product_title(&self) -> String {
        self.first_unit()
            .and_then(|u| u.product_title.clone())
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| "Unknown Product".to_string())
    }

    pub fn store_label(&self) -> String {
        self.first_unit()
            .and_then(|u| u.store_name.clone())
            .or_else(|| self.store_name.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn order_label(&self) -> String {
        self.first_unit()
            .and_then(|u| u.order_number.clone())
            .or_else(|| self.order_number.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Smallest trackable piece, carries its own QR token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUnit {
    pub id: EntityId,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub product_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
}

/// Item fields written to the batch Excel sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchExportItem {
    pub title: String,
    pub store_name: String,
    pub sku: String,
    pub order_number: String,
    pub quantity_in_batch: u32,
}

impl From<&BatchItem> for BatchExportItem {
    fn from(item: &BatchItem) -> Self {
        Self {
            title: item.title.clone().unwrap_or_default(),
            store_name: item.store_name.clone().unwrap_or_default(),
            sku: item.sku.clone().unwrap_or_default(),
            order_number: item.order_number.clone().unwrap_or_default(),
            quantity_in_batch: item.quantity_in_batch,
        }
    }
}

// ============================================================================
// Creation
// ============================================================================

/// Body of `POST /admin/batches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBatch {
    pub batch_name: String,
    pub max_capacity: u32,
    pub rule_ids: Vec<EntityId>,
}

impl NewBatch {
    /// Validates the raw form values and builds the request body.
    pub fn validate(
        batch_name: &str,
        max_capacity: &str,
        rule_ids: &[EntityId],
    ) -> Result<Self, String> {
        let raw = max_capacity.trim();
        if raw.is_empty() {
            return Err("Please enter max capacity".into());
        }
        let max_capacity = match raw.parse::<u32>() {
            Ok(v) if v > 0 => v,
            _ => return Err("Max capacity must be a positive integer".into()),
        };
        if rule_ids.is_empty() {
            return Err("Select at least one rule to include".into());
        }
        Ok(Self {
            batch_name: batch_name.trim().to_string(),
            max_capacity,
            rule_ids: rule_ids.to_vec(),
        })
    }
}

// ============================================================================
// Rules attached to a batch
// ============================================================================

/// Answer of `GET /admin/batches/:id/rules`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRules {
    #[serde(default)]
    pub batch: BatchRulesHeader,
    #[serde(default)]
    pub rules: Vec<AttachedRule>,
}

impl BatchRules {
    pub fn attached_ids(&self) -> Vec<EntityId> {
        self.rules.iter().map(|r| r.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRulesHeader {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub max_capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedRule {
    pub id: EntityId,
}

/// Body of `PUT /admin/batches/:id/rules`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRulesUpdate {
    pub rule_ids_to_add: Vec<EntityId>,
    pub rule_ids_to_remove: Vec<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
}

/// Body of `PATCH /batches/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatusUpdate {
    pub status: ProductionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(capacity: u32, max_capacity: u32) -> Batch {
        Batch {
            id: EntityId::from(7),
            name: Some("B-7".into()),
            capacity,
            max_capacity,
            status: ProductionStatus::Batched,
            created_at: None,
            qr_code_url: None,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_capacity_helpers() {
        assert!(!batch(8, 10).is_nearly_full());
        assert!(batch(9, 10).is_nearly_full());
        assert!(!batch(9, 10).is_full());
        assert!(batch(10, 10).is_full());
        assert!(!batch(0, 0).is_full());
        assert_eq!(batch(5, 0).fill_ratio(), 0.0);
        assert_eq!(batch(12, 10).fill_percent(), 100.0);
    }

    #[test]
    fn test_batch_detail_decodes() {
        let json = r#"{
            "id": 4, "name": "Morning", "capacity": 2, "maxCapacity": 5,
            "status": "DESIGNED", "createdAt": "2024-05-01T10:00:00Z",
            "qrCodeUrl": "https://cdn/qr.png",
            "items": [{"id": 11, "totalUnits": 2, "units": [
                {"id": 100, "productTitle": "Mug", "sku": "MUG-1", "status": "PRINTING",
                 "storeName": "Acme", "orderNumber": "1001"},
                {"id": 101, "status": "PRINTED"}
            ]}]
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.status, ProductionStatus::Designed);
        assert!(batch.has_qr());
        assert_eq!(batch.total_units(), 2);
        assert_eq!(batch.items[0].product_title(), "Mug");
        assert_eq!(batch.items[0].order_label(), "1001");
        assert_eq!(batch.items[0].units[1].status, ProductionStatus::Printed);
    }

    #[test]
    fn test_new_batch_validation() {
        let ids = vec![EntityId::from(1)];
        assert_eq!(
            NewBatch::validate("x", " ", &ids),
            Err("Please enter max capacity".to_string())
        );
        assert_eq!(
            NewBatch::validate("x", "0", &ids),
            Err("Max capacity must be a positive integer".to_string())
        );
        assert_eq!(
            NewBatch::validate("x", "10", &[]),
            Err("Select at least one rule to include".to_string())
        );
        let ok = NewBatch::validate("  Night  ", "10", &ids).unwrap();
        assert_eq!(ok.batch_name, "Night");
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["maxCapacity"], 10);
        assert_eq!(json["ruleIds"][0], 1);
    }

    #[test]
    fn test_new_batch_rejects_capacity_out_of_range() {
        let ids = vec![EntityId::from(1)];
        for raw in ["4294967297", "-3", "99999999999999999999"] {
            assert_eq!(
                NewBatch::validate("b", raw, &ids),
                Err("Max capacity must be a positive integer".to_string()),
                "input {raw}"
            );
        }
        let max = NewBatch::validate("b", "4294967295", &ids).unwrap();
        assert_eq!(max.max_capacity, u32::MAX);
    }

    #[test]
    fn test_rules_update_omits_capacity() {
        let update = BatchRulesUpdate {
            rule_ids_to_add: vec![EntityId::from(2)],
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"ruleIdsToAdd":[2],"ruleIdsToRemove":[]}"#);
    }
}
