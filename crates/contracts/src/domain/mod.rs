pub mod a001_store;
pub mod a002_rule;
pub mod a003_batch;
pub mod a004_order;
pub mod a005_product;
pub mod a006_main_stock;
pub mod a007_stock_item;
pub mod a008_returned_item;
pub mod a009_batch_file;
pub mod d400_dashboard;
