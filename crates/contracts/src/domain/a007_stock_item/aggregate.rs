use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

pub const DEFAULT_MIN_STOCK_LEVEL: i64 = 5;

// ============================================================================
// Stock item
// ============================================================================

/// Physical blank tracked in inventory, with its variants nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub variants: Vec<StockVariant>,
}

/// Body of `POST /inventory/stock-items` and `PUT /inventory/stock-items/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockItemInput {
    pub name: String,
    pub sku: String,
}

impl StockItemInput {
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            name: item.name.clone(),
            sku: item.sku.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".into());
        }
        Ok(())
    }
}

// ============================================================================
// Stock variant
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVariant {
    pub id: EntityId,
    #[serde(default)]
    pub stock_item_id: Option<EntityId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_min_stock_level")]
    pub min_stock_level: i64,
    #[serde(default)]
    pub max_stock_level: Option<i64>,
}

impl StockVariant {
    pub fn is_low(&self) -> bool {
        self.current_stock <= self.min_stock_level
    }
}

/// Body of `POST /inventory/stock-variants` and `PUT /inventory/stock-variants/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVariantInput {
    pub stock_item_id: Option<EntityId>,
    pub sku: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub current_stock: i64,
    pub min_stock_level: i64,
    pub max_stock_level: Option<i64>,
}

impl StockVariantInput {
    pub fn for_item(stock_item_id: EntityId) -> Self {
        Self {
            stock_item_id: Some(stock_item_id),
            ..Self::default()
        }
    }

    pub fn from_variant(stock_item_id: EntityId, variant: &StockVariant) -> Self {
        Self {
            stock_item_id: Some(stock_item_id),
            sku: variant.sku.clone(),
            name: variant.name.clone(),
            color: variant.color.clone().unwrap_or_default(),
            size: variant.size.clone().unwrap_or_default(),
            current_stock: variant.current_stock,
            min_stock_level: variant.min_stock_level,
            max_stock_level: variant.max_stock_level,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stock_item_id.is_none() {
            return Err("Please select a stock item to add this variant.".into());
        }
        if self.sku.trim().is_empty() || self.name.trim().is_empty() {
            return Err("Variant SKU and name are required".into());
        }
        if self.current_stock < 0 || self.min_stock_level < 0 {
            return Err("Stock levels cannot be negative".into());
        }
        if let Some(max) = self.max_stock_level {
            if max < self.min_stock_level {
                return Err("Max stock level must not be below min stock level".into());
            }
        }
        Ok(())
    }
}

impl Default for StockVariantInput {
    fn default() -> Self {
        Self {
            stock_item_id: None,
            sku: String::new(),
            name: String::new(),
            color: String::new(),
            size: String::new(),
            current_stock: 0,
            min_stock_level: DEFAULT_MIN_STOCK_LEVEL,
            max_stock_level: None,
        }
    }
}

// ============================================================================
// Product stock mapping
// ============================================================================

/// Links a store product variant to the stock variant it consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStockMapping {
    pub id: EntityId,
    #[serde(default)]
    pub product_variant_id: Option<EntityId>,
    #[serde(default)]
    pub stock_variant_id: Option<EntityId>,
    #[serde(default = "one")]
    pub quantity_per_unit: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStockMappingInput {
    pub product_variant_id: EntityId,
    pub stock_variant_id: EntityId,
    pub quantity_per_unit: i64,
}

fn default_min_stock_level() -> i64 {
    DEFAULT_MIN_STOCK_LEVEL
}

fn one() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let v: StockVariant =
            serde_json::from_str(r#"{"id":1,"sku":"TS-B-M","name":"Black M","currentStock":3}"#)
                .unwrap();
        assert_eq!(v.min_stock_level, 5);
        assert!(v.is_low());
    }

    #[test]
    fn test_variant_input_validation() {
        let mut input = StockVariantInput::default();
        assert!(input.validate().is_err());
        input = StockVariantInput::for_item(EntityId::from(2));
        input.sku = "TS-B-L".into();
        input.name = "Black L".into();
        assert!(input.validate().is_ok());
        input.max_stock_level = Some(1);
        assert!(input.validate().is_err());

        let json = serde_json::to_value(StockVariantInput::for_item(EntityId::from(2))).unwrap();
        assert_eq!(json["stockItemId"], 2);
        assert_eq!(json["minStockLevel"], 5);
        assert_eq!(json["maxStockLevel"], serde_json::Value::Null);
    }

    #[test]
    fn test_stock_item_input() {
        let item = StockItemInput {
            name: "Tee".into(),
            sku: " ".into(),
        };
        assert_eq!(item.validate(), Err("SKU is required".to_string()));
    }
}
