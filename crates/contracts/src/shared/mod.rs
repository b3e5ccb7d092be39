pub mod error;
pub mod id;
pub mod paging;

pub use error::ApiErrorBody;
pub use id::EntityId;
pub use paging::{Listing, PagedResponse, PaginatedResponse, Pagination};
