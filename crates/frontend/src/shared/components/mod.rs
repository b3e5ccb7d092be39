pub mod feedback;
pub mod image_preview;
pub mod page_header;
pub mod pagination_controls;
pub mod rule_picker;
pub mod status_pill;

pub use feedback::{alert, confirm, EmptyState, ErrorBanner, LoadingIndicator};
pub use image_preview::ImagePreview;
pub use page_header::PageHeader;
pub use pagination_controls::{PageSizeSelect, PaginationControls};
pub use rule_picker::RulePicker;
pub use status_pill::{CapacityBar, DeliveryPill, StatusPill};
