pub mod delivery_status;
pub mod production_status;

pub use delivery_status::{delivery_status_meta, DeliveryStatusMeta};
pub use production_status::ProductionStatus;
