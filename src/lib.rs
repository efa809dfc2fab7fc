//! # campushub-client
//!
//! Leptos + WASM frontend for CampusHub, a university secondhand
//! marketplace. Talks to three remote REST services (users/auth, listings,
//! search); all client-side state lives in the `state` controllers, with
//! the bearer token persisted in browser storage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
