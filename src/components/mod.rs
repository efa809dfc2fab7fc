//! Reusable UI components.

pub mod header;
pub mod listing_card;
pub mod require_auth;
pub mod search_bar;
