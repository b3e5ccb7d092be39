//! `/admin/*` endpoints: catalog setup, main stock, dashboard counters, returns.

use contracts::domain::a002_rule::{NewRule, ProductTypesResponse, Rule, VariantTitlesResponse};
use contracts::domain::a001_store::NewStore;
use contracts::domain::a003_batch::{BatchRules, BatchRulesUpdate, NewBatch};
use contracts::domain::a006_main_stock::{
    MainStock, MainStockProduct, NewMainStock, ProductQuantity, QuantityAssignment,
};
use contracts::domain::a008_returned_item::ReturnedItem;
use contracts::domain::d400_dashboard::{ProductTypesSold, TotalOrders};
use contracts::query::{DashboardFilters, MainStockProductFilters, ReturnFilters, RuleFilters};
use contracts::shared::{EntityId, Listing, PaginatedResponse};
use serde_json::Value;

use crate::shared::api_utils::encode_segment;
use crate::shared::http::{self, ApiResult};

// ============================================================================
// Stores, rules, batches
// ============================================================================

pub async fn create_store(store: &NewStore) -> ApiResult<Value> {
    http::post_json("/admin/stores", &store.normalized()).await
}

pub async fn create_rule(rule: &NewRule) -> ApiResult<Value> {
    http::post_json("/admin/rules", rule).await
}

pub async fn create_batch(batch: &NewBatch) -> ApiResult<Value> {
    http::post_json("/admin/batches", batch).await
}

pub async fn list_rules(filters: &RuleFilters) -> ApiResult<Vec<Rule>> {
    let rules: Listing<Rule> =
        http::get_json_query("/admin/rules", &filters.to_query_string()).await?;
    Ok(rules.into_vec())
}

pub async fn list_product_types_by_store(store_name: &str) -> ApiResult<Vec<String>> {
    let types: ProductTypesResponse =
        http::get_json(&format!("/admin/rules/store/{}", encode_segment(store_name))).await?;
    Ok(types.into_vec())
}

pub async fn list_variant_titles_by_product_type(
    store_name: &str,
    product_type: &str,
) -> ApiResult<Vec<String>> {
    let titles: VariantTitlesResponse = http::get_json(&format!(
        "/admin/rules/{}/{}/variantTitles",
        encode_segment(store_name),
        encode_segment(product_type)
    ))
    .await?;
    Ok(titles.variant_titles)
}

pub async fn delete_rule(id: &EntityId) -> ApiResult<()> {
    http::delete(&format!("/admin/rules/{}", id)).await
}

pub async fn get_batch_rules(batch_id: &EntityId) -> ApiResult<BatchRules> {
    http::get_json(&format!("/admin/batches/{}/rules", batch_id)).await
}

pub async fn update_batch_rules(batch_id: &EntityId, update: &BatchRulesUpdate) -> ApiResult<Value> {
    http::put_json(&format!("/admin/batches/{}/rules", batch_id), update).await
}

// ============================================================================
// Main stock
// ============================================================================

pub async fn create_main_stock(stock: &NewMainStock) -> ApiResult<Value> {
    http::post_json("/admin/mainStock", stock).await
}

pub async fn list_main_stock() -> ApiResult<Vec<MainStock>> {
    let stocks: Listing<MainStock> = http::get_json("/admin/mainStock").await?;
    Ok(stocks.into_vec())
}

pub async fn get_main_stock_by_id(id: &EntityId) -> ApiResult<MainStock> {
    http::get_json(&format!("/admin/mainStock/{}", id)).await
}

pub async fn update_main_stock(id: &EntityId, stock: &NewMainStock) -> ApiResult<Value> {
    http::put_json(&format!("/admin/mainStock/{}", id), stock).await
}

pub async fn delete_main_stock(id: &EntityId) -> ApiResult<()> {
    http::delete(&format!("/admin/mainStock/{}", id)).await
}

pub async fn list_product_quantities(main_stock_id: &EntityId) -> ApiResult<Vec<ProductQuantity>> {
    let quantities: Listing<ProductQuantity> =
        http::get_json(&format!("/admin/mainStock/{}/quantities", main_stock_id)).await?;
    Ok(quantities.into_vec())
}

pub async fn assign_product_quantity(
    main_stock_id: &EntityId,
    assignment: &QuantityAssignment,
) -> ApiResult<Value> {
    http::post_json(&format!("/admin/mainStock/{}/assign", main_stock_id), assignment).await
}

pub async fn delete_product_quantity(main_stock_id: &EntityId, sku: &str) -> ApiResult<()> {
    http::delete(&format!(
        "/admin/mainStock/{}/sku/{}",
        main_stock_id,
        encode_segment(sku)
    ))
    .await
}

pub async fn get_products_by_main_stock(
    main_stock_id: &EntityId,
    filters: &MainStockProductFilters,
) -> ApiResult<PaginatedResponse<MainStockProduct>> {
    http::get_json_query(
        &format!("/admin/mainStock/{}/products", main_stock_id),
        &filters.to_query_string(),
    )
    .await
}

// ============================================================================
// Dashboard and returns
// ============================================================================

pub async fn get_total_orders(filters: &DashboardFilters) -> ApiResult<TotalOrders> {
    http::get_json_query("/admin/dashboard/totalOrders", &filters.to_query_string()).await
}

pub async fn get_total_product_types_sold(filters: &DashboardFilters) -> ApiResult<ProductTypesSold> {
    http::get_json_query(
        "/admin/dashboard/totalProductTypesSold",
        &filters.to_query_string(),
    )
    .await
}

pub async fn get_returned_items(filters: &ReturnFilters) -> ApiResult<PaginatedResponse<ReturnedItem>> {
    http::get_json_query("/admin/returns", &filters.to_query_string()).await
}
