//! Operator endpoints: catalog reads, orders, batches, files, scans, inventory.

use contracts::domain::a001_store::Store;
use contracts::domain::a002_rule::Rule;
use contracts::domain::a003_batch::{Batch, BatchStatusUpdate};
use contracts::domain::a004_order::{Order, ReplacementRequest, StatusUpdate};
use contracts::domain::a005_product::Product;
use contracts::domain::a007_stock_item::{
    ProductStockMapping, ProductStockMappingInput, StockItem, StockItemInput, StockVariant,
    StockVariantInput,
};
use contracts::domain::a009_batch_file::{UploadResponse, UploadedFile};
use contracts::enums::ProductionStatus;
use contracts::query::{BatchFilters, OrderFilters, ProductFilters, RuleFilters};
use contracts::shared::{EntityId, Listing, PagedResponse};
use contracts::workflow::{ScanAction, ScanResult};
use serde_json::Value;
use web_sys::{Blob, File, FormData};

use crate::shared::http::{self, ApiError, ApiResult};

/// Zip archives of large batches take a while to assemble on the server.
pub const ZIP_DOWNLOAD_TIMEOUT_MS: u32 = if cfg!(debug_assertions) {
    60_000
} else {
    120_000
};

fn require_id(id: &EntityId, what: &str) -> ApiResult<()> {
    if id.to_string().trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", what)));
    }
    Ok(())
}

// ============================================================================
// Catalog
// ============================================================================

pub async fn get_stores() -> ApiResult<Vec<Store>> {
    let stores: Listing<Store> = http::get_json("/stores").await?;
    Ok(stores.into_vec())
}

pub async fn get_products(filters: &ProductFilters) -> ApiResult<PagedResponse<Product>> {
    http::get_json_query("/products", &filters.to_query_string()).await
}

/// Rules a batch can be built from (`/batches/rules`).
pub async fn get_batch_rule_options(filters: &RuleFilters) -> ApiResult<Vec<Rule>> {
    let rules: Listing<Rule> =
        http::get_json_query("/batches/rules", &filters.to_query_string()).await?;
    Ok(rules.into_vec())
}

// ============================================================================
// Orders
// ============================================================================

pub async fn get_orders(filters: &OrderFilters) -> ApiResult<PagedResponse<Order>> {
    http::get_json_query("/orders", &filters.to_query_string()).await
}

pub async fn get_order_by_id(order_id: &EntityId) -> ApiResult<Order> {
    require_id(order_id, "Order ID")?;
    http::get_json(&format!("/orders/{}", order_id)).await
}

pub async fn item_status_update(order_item_id: &EntityId, update: &StatusUpdate) -> ApiResult<Value> {
    http::patch_json(&format!("/orders/orderItems/{}/status", order_item_id), update).await
}

pub async fn bulk_update_order_items_status(
    order_id: &EntityId,
    status: &ProductionStatus,
) -> ApiResult<Value> {
    require_id(order_id, "Order ID")?;
    http::post_json(
        &format!("/orders/items/{}/bulk-status", order_id),
        &StatusUpdate::new(status.clone()),
    )
    .await
}

pub async fn replacement(unit_id: &EntityId, request: &ReplacementRequest) -> ApiResult<Value> {
    http::patch_json(&format!("/orders/units/{}/replace", unit_id), request).await
}

// ============================================================================
// Batches
// ============================================================================

pub async fn get_batches(filters: &BatchFilters) -> ApiResult<PagedResponse<Batch>> {
    http::get_json_query("/batches", &filters.to_query_string()).await
}

pub async fn get_batch_by_id(batch_id: &EntityId) -> ApiResult<Batch> {
    require_id(batch_id, "Batch ID")?;
    http::get_json(&format!("/batches/{}", batch_id)).await
}

pub async fn update_batch_status(batch_id: &EntityId, status: &ProductionStatus) -> ApiResult<Value> {
    require_id(batch_id, "Batch ID")?;
    if status.code().is_empty() {
        return Err(ApiError::Validation("Batch ID and status are required".into()));
    }
    let body = BatchStatusUpdate {
        status: status.clone(),
    };
    http::patch_json(&format!("/batches/{}/status", batch_id), &body).await
}

// ============================================================================
// Batch files (Google Drive proxy)
// ============================================================================

pub async fn get_uploaded_files(batch_id: &EntityId) -> ApiResult<Vec<UploadedFile>> {
    let files: Listing<UploadedFile> =
        http::get_json(&format!("/google/files/{}", batch_id)).await?;
    Ok(files.into_vec())
}

/// Multipart upload: every file under `files`, plus the owning `batchId`.
pub async fn upload_files(files: &[File], batch_id: &EntityId) -> ApiResult<UploadResponse> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    }
    form.append_with_str("batchId", &batch_id.to_string())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    http::post_multipart("/google/upload", form).await
}

pub async fn download_file(file_id: &EntityId) -> ApiResult<Blob> {
    http::get_blob(&format!("/google/download/{}", file_id), None).await
}

pub async fn download_batch_files(batch_id: &EntityId) -> ApiResult<Blob> {
    http::get_blob(
        &format!("/google/downloadZip/{}", batch_id),
        Some(ZIP_DOWNLOAD_TIMEOUT_MS),
    )
    .await
}

// ============================================================================
// Scans
// ============================================================================

pub async fn scan(action: &ScanAction) -> ApiResult<ScanResult> {
    http::get_json(&action.endpoint()).await
}

// ============================================================================
// Inventory: stock items, variants, product mappings
// ============================================================================

pub async fn get_stock_items() -> ApiResult<Vec<StockItem>> {
    let items: Listing<StockItem> = http::get_json("/inventory/stock-items").await?;
    Ok(items.into_vec())
}

pub async fn get_stock_item_by_id(id: &EntityId) -> ApiResult<StockItem> {
    http::get_json(&format!("/inventory/stock-items/{}", id)).await
}

pub async fn create_stock_item(input: &StockItemInput) -> ApiResult<Value> {
    http::post_json("/inventory/stock-items", input).await
}

pub async fn update_stock_item(id: &EntityId, input: &StockItemInput) -> ApiResult<Value> {
    http::put_json(&format!("/inventory/stock-items/{}", id), input).await
}

pub async fn delete_stock_item(id: &EntityId) -> ApiResult<()> {
    http::delete(&format!("/inventory/stock-items/{}", id)).await
}

pub async fn get_stock_variants() -> ApiResult<Vec<StockVariant>> {
    let variants: Listing<StockVariant> = http::get_json("/inventory/stock-variants").await?;
    Ok(variants.into_vec())
}

pub async fn get_stock_variant_by_id(id: &EntityId) -> ApiResult<StockVariant> {
    http::get_json(&format!("/inventory/stock-variants/{}", id)).await
}

pub async fn create_stock_variant(input: &StockVariantInput) -> ApiResult<Value> {
    http::post_json("/inventory/stock-variants", input).await
}

pub async fn update_stock_variant(id: &EntityId, input: &StockVariantInput) -> ApiResult<Value> {
    http::put_json(&format!("/inventory/stock-variants/{}", id), input).await
}

pub async fn delete_stock_variant(id: &EntityId) -> ApiResult<()> {
    http::delete(&format!("/inventory/stock-variants/{}", id)).await
}

pub async fn get_product_stock_mappings() -> ApiResult<Vec<ProductStockMapping>> {
    let mappings: Listing<ProductStockMapping> =
        http::get_json("/inventory/product-stock-mappings").await?;
    Ok(mappings.into_vec())
}

pub async fn create_product_stock_mapping(input: &ProductStockMappingInput) -> ApiResult<Value> {
    http::post_json("/inventory/product-stock-mappings", input).await
}

pub async fn delete_product_stock_mapping(id: &EntityId) -> ApiResult<()> {
    http::delete(&format!("/inventory/product-stock-mappings/{}", id)).await
}
