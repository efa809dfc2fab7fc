//! Persisted session token storage and cross-tab change notifications.
//!
//! The bearer token lives in `localStorage` under a fixed key so it survives
//! reloads and is shared across tabs. The browser fires a `storage` event in
//! every *other* tab when the store changes; `on_storage_change` is the
//! subscription seam the app uses to re-derive its session from the store.
//! Requires a browser environment; outside it the store reads as empty.

use crate::state::session::TokenStore;

const TOKEN_KEY: &str = "accessToken";

/// `localStorage`-backed token store used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .local_storage()
                .ok()
                .flatten()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// Subscribe to out-of-band changes of the persisted store (another tab
/// logging in or out).
///
/// The listener is registered once for the application lifetime and is never
/// removed, so the closure is intentionally leaked.
pub fn on_storage_change(callback: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(
            Box::new(move |_event: web_sys::StorageEvent| callback())
                as Box<dyn FnMut(web_sys::StorageEvent)>,
        );
        let _ = window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = callback;
    }
}
