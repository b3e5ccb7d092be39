pub mod a001_store;
pub mod a003_batch;
pub mod a004_order;
pub mod a005_product;
pub mod a006_main_stock;
