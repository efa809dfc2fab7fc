//! Session-scoped cache of resolved wishlist listings.
//!
//! A wishlist refresh resolves every id with its own listings-service call,
//! which is wasteful when the user bounces between pages. Resolved listings
//! are cached in `sessionStorage` (dies with the tab) under a fixed key with
//! a short TTL; mutations and logout invalidate it.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use crate::net::types::Listing;

#[cfg(feature = "hydrate")]
const CACHE_KEY: &str = "campushub_wishlist_cache";

/// How long a cached resolution stays valid.
pub const CACHE_TTL_MS: f64 = 60_000.0;

#[derive(serde::Serialize, serde::Deserialize)]
struct CacheEntry {
    stored_at: f64,
    items: Vec<Listing>,
}

impl CacheEntry {
    /// A clock that moved backwards also counts as stale.
    fn is_fresh(&self, now_ms: f64, ttl_ms: f64) -> bool {
        now_ms >= self.stored_at && now_ms - self.stored_at < ttl_ms
    }
}

/// Read the cached wishlist, if present and fresh.
pub fn load() -> Option<Vec<Listing>> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.session_storage().ok().flatten()?;
        let raw = storage.get_item(CACHE_KEY).ok().flatten()?;
        let entry: CacheEntry = serde_json::from_str(&raw).ok()?;
        if entry.is_fresh(js_sys::Date::now(), CACHE_TTL_MS) {
            Some(entry.items)
        } else {
            let _ = storage.remove_item(CACHE_KEY);
            None
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cache a freshly resolved wishlist.
pub fn store(items: &[Listing]) {
    #[cfg(feature = "hydrate")]
    {
        let entry = CacheEntry {
            stored_at: js_sys::Date::now(),
            items: items.to_vec(),
        };
        if let (Some(storage), Ok(raw)) = (
            web_sys::window().and_then(|w| w.session_storage().ok().flatten()),
            serde_json::to_string(&entry),
        ) {
            let _ = storage.set_item(CACHE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = items;
    }
}

/// Drop the cached wishlist (logout, or any confirmed mutation).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(CACHE_KEY);
        }
    }
}
