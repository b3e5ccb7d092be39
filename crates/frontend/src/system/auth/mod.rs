pub mod api;
pub mod context;
pub mod guard;

pub use context::{use_auth, use_role, AuthProvider, AuthState};
pub use guard::RequireRole;
