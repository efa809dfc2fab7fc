//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Two controllers own all shared mutable state: `session` (bearer token +
//! derived auth flag, backed by persisted storage) and `wishlist` (the
//! session-scoped cache of wishlisted listings). UI pages never touch the
//! persisted store or the wishlist vector directly; they go through the
//! operations defined here.

pub mod session;
pub mod wishlist;
