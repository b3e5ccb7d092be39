//! Wire contracts shared by the Opify console.
//!
//! Everything here is plain Rust without browser dependencies, so the
//! workflow rules can be tested natively.

pub mod domain;
pub mod enums;
pub mod query;
pub mod shared;
pub mod system;
pub mod workflow;
