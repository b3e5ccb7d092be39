//! One async function per backend endpoint. Parameter shaping only; the
//! workflow rules live in `contracts::workflow`.

pub mod admin;
pub mod agents;
