//! Session state: the bearer token and the authentication flag derived
//! from it.
//!
//! The invariant is `is_authenticated() == token().is_some()`, held by
//! routing every token mutation through [`Session::login`],
//! [`Session::logout`], and [`Session::sync_from_store`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::RwSignal;

use crate::util::storage::LocalTokenStore;

/// Signal type for the session context provided at the app root.
pub type SessionSignal = RwSignal<Session<LocalTokenStore>>;

/// Persisted token storage behind the session.
///
/// The browser implementation (`localStorage`) is `util::storage::LocalTokenStore`;
/// tests substitute [`MemoryTokenStore`].
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store for tests and non-browser callers.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// The client's belief about whether a user is logged in.
///
/// Initialized from whatever the persisted store holds; an absent token is a
/// normal state, not a failure. None of the operations can fail.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore + Default> Default for Session<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: TokenStore> Session<S> {
    /// Build a session from whatever the store currently holds.
    pub fn new(store: S) -> Self {
        let token = store.load();
        Self { store, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current bearer token, if any. Never fails.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persist a freshly issued token and mark the session authenticated.
    /// The token is opaque; the server is trusted to have issued it.
    pub fn login(&mut self, token: &str) {
        self.store.save(token);
        self.token = Some(token.to_owned());
    }

    /// Drop the token from memory and from the store. Safe to call when
    /// already logged out.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }

    /// Re-derive the session from the store after an out-of-band change
    /// (another tab logged in or out). Returns `true` if the authentication
    /// flag flipped.
    pub fn sync_from_store(&mut self) -> bool {
        let was_authenticated = self.is_authenticated();
        self.token = self.store.load();
        was_authenticated != self.is_authenticated()
    }
}
