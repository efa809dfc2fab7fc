//! Browser-facing utilities: persisted storage, the wishlist cache, and
//! form validation helpers.

pub mod cache;
pub mod storage;
pub mod validate;
