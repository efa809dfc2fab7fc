//! Page-level components, one per route.

pub mod create_listing;
pub mod edit_listing;
pub mod home;
pub mod listing;
pub mod login;
pub mod profile;
pub mod signup;
pub mod user;
pub mod verify_email;
pub mod wishlist;
