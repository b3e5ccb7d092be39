pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod http;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
pub mod query_cache;
