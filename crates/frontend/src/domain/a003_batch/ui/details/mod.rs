//! Batch details: info, QR, files, items and units.
//!
//! - view_model.rs: loading and commands
//! - view.rs: page layout
//! - files.rs: Google Drive files section

mod files;
mod view;
mod view_model;

pub use view::BatchDetails;
pub use view_model::BatchDetailsViewModel;
