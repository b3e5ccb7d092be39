//! Order details: header, items with role-gated status changes, units.
//!
//! - view_model.rs: loading and commands
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
