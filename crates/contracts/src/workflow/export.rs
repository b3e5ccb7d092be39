use serde::Serialize;

use crate::domain::a003_batch::{Batch, BatchExportItem};
use crate::shared::EntityId;

pub const EXPORT_SHEET_NAME: &str = "Items";

/// One spreadsheet row per physical unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchExportRow {
    #[serde(rename = "BatchName")]
    pub batch_name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StoreName")]
    pub store_name: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "OrderNumber")]
    pub order_number: String,
}

/// Each item is repeated `quantityInBatch` times.
pub fn batch_rows(batch: &Batch) -> Vec<BatchExportRow> {
    let batch_name = batch.name.clone().unwrap_or_default();
    batch
        .items
        .iter()
        .map(BatchExportItem::from)
        .flat_map(|item| {
            let row = BatchExportRow {
                batch_name: batch_name.clone(),
                title: item.title,
                store_name: item.store_name,
                sku: item.sku,
                order_number: item.order_number,
            };
            std::iter::repeat(row).take(item.quantity_in_batch as usize)
        })
        .collect()
}

/// The sheet is only produced for full batches.
pub fn can_export(batch: &Batch) -> bool {
    batch.is_full()
}

pub fn xlsx_file_name(batch: &Batch) -> String {
    format!("{}_items.xlsx", batch.name.as_deref().unwrap_or_default())
}

/// Every character outside `[A-Za-z0-9]` becomes `_`.
pub fn zip_file_name(batch_name: Option<&str>, batch_id: &EntityId) -> String {
    match batch_name.map(str::trim) {
        Some(name) if !name.is_empty() => {
            let safe: String = name
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!("{}.zip", safe)
        }
        _ => format!("batch-{}.zip", batch_id),
    }
}

pub fn qr_file_name(name: &str) -> String {
    format!("{}-QR.png", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Batch {
        serde_json::from_str(
            r#"{"id":3,"name":"Mugs May","capacity":3,"maxCapacity":3,"status":"BATCHED",
                "items":[
                    {"title":"Mug","storeName":"Acme","sku":"MUG-W","orderNumber":"1001","quantityInBatch":2},
                    {"title":"Cap","storeName":"Acme","sku":"CAP","orderNumber":"1002","quantityInBatch":1},
                    {"title":"Skip","quantityInBatch":0}
                ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_repeat_per_unit() {
        let rows = batch_rows(&batch());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[2].sku, "CAP");
        assert_eq!(rows[0].batch_name, "Mugs May");

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["SKU"], "MUG-W");
        assert_eq!(json["OrderNumber"], "1001");
    }

    #[test]
    fn test_file_names() {
        let b = batch();
        assert!(can_export(&b));
        assert_eq!(xlsx_file_name(&b), "Mugs May_items.xlsx");
        assert_eq!(zip_file_name(Some("Mugs May/#1"), &b.id), "Mugs_May__1.zip");
        assert_eq!(zip_file_name(None, &b.id), "batch-3.zip");
        assert_eq!(zip_file_name(Some("  "), &EntityId::from("ab")), "batch-ab.zip");
        assert_eq!(qr_file_name("Mugs May"), "Mugs May-QR.png");
    }
}
