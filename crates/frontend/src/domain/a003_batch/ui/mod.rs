pub mod actions;
pub mod details;
pub mod list;
