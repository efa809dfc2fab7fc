//! Wishlist state: a session-scoped cache of the listings the user has
//! wishlisted, kept in sync with the users service.
//!
//! DESIGN
//! ======
//! The remote side only stores listing ids; a refresh resolves each id into
//! a full `Listing` through the listings service. Mutations are optimistic
//! in one direction only: the in-memory list changes *after* the remote call
//! resolves, so a rejected call leaves state untouched.
//!
//! Overlapping refreshes are serialized by an epoch stamp: every refresh
//! (and every `clear`) bumps the epoch, and a result may only be published
//! under the epoch it was started with. A stale response therefore cannot
//! clobber the state of a newer refresh or of a logged-out session.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Listing;
use crate::net::users::HttpWishlistApi;
use crate::state::session::SessionSignal;
use crate::util::cache;

/// Signal type for the wishlist context provided at the app root.
pub type WishlistSignal = RwSignal<WishlistState>;

/// Remote wishlist operations, abstracted so tests can substitute a fake.
/// The production implementation is [`HttpWishlistApi`].
#[allow(async_fn_in_trait)]
pub trait WishlistApi {
    async fn wishlist_ids(&self, token: &str) -> Result<Vec<String>, ApiError>;
    async fn listing_by_id(&self, id: &str) -> Result<Listing, ApiError>;
    async fn add(&self, token: &str, listing_id: &str) -> Result<(), ApiError>;
    async fn remove(&self, token: &str, listing_id: &str) -> Result<(), ApiError>;
}

/// In-memory wishlist for the current session.
///
/// Invariant: empty whenever the session is unauthenticated. Item order is
/// arrival order from the remote fetch.
#[derive(Clone, Debug, Default)]
pub struct WishlistState {
    pub items: Vec<Listing>,
    pub loading: bool,
    epoch: u64,
}

impl WishlistState {
    /// Synchronous membership check over the in-memory list. No I/O.
    pub fn is_item_wishlisted(&self, listing_id: &str) -> bool {
        self.items.iter().any(|item| item.id == listing_id)
    }

    /// Start a refresh. Returns the epoch the eventual result must present
    /// to [`WishlistState::finish_refresh`].
    pub fn begin_refresh(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.epoch
    }

    /// Publish fetched items. Returns `false` (and changes nothing) when the
    /// epoch is stale, i.e. a newer refresh or a `clear` happened since.
    pub fn finish_refresh(&mut self, epoch: u64, items: Vec<Listing>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// End a refresh that produced no result. Leaves the items alone.
    pub fn abort_refresh(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.loading = false;
        }
    }

    /// Current epoch stamp. Mutations capture it before their remote call so
    /// a confirmation cannot land after a `clear` or a newer refresh.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Apply a confirmed remote add. Returns `false` (and changes nothing)
    /// when the epoch is stale.
    pub fn confirm_add(&mut self, epoch: u64, listing: Listing) -> bool {
        if epoch != self.epoch {
            return false;
        }
        if !self.is_item_wishlisted(&listing.id) {
            self.items.push(listing);
        }
        true
    }

    /// Apply a confirmed remote remove, under the same epoch rule as
    /// [`WishlistState::confirm_add`].
    pub fn confirm_remove(&mut self, epoch: u64, listing_id: &str) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.items.retain(|item| item.id != listing_id);
        true
    }

    /// Empty the list and invalidate any in-flight refresh.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.items.clear();
        self.loading = false;
    }
}

/// Resolve wishlist ids into full listings.
///
/// An id whose listing lookup fails is skipped with a warning rather than
/// failing the whole refresh; a dangling wishlist entry should not hide the
/// rest of the list.
///
/// # Errors
///
/// Fails only when the id fetch itself fails.
pub async fn resolve_items<A: WishlistApi>(api: &A, token: &str) -> Result<Vec<Listing>, ApiError> {
    let ids = api.wishlist_ids(token).await?;
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        match api.listing_by_id(&id).await {
            Ok(listing) => items.push(listing),
            Err(err) => log::warn!("wishlist entry {id} could not be resolved: {err}"),
        }
    }
    Ok(items)
}

/// Refetch the wishlist so it matches the current session.
///
/// Unauthenticated sessions get an empty list immediately, with no network
/// call. Called from the app-level effect on every auth transition,
/// including the initial mount.
pub fn refresh(session: SessionSignal, wishlist: WishlistSignal) {
    if !session.with_untracked(|s| s.is_authenticated()) {
        wishlist.update(|w| w.clear());
        cache::clear();
        return;
    }
    let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
        return;
    };
    leptos::task::spawn_local(refresh_with(HttpWishlistApi, wishlist, token));
}

/// Add a listing to the wishlist. The list changes only if the remote call
/// succeeds.
pub fn add(session: SessionSignal, wishlist: WishlistSignal, listing: Listing) {
    let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
        return;
    };
    leptos::task::spawn_local(add_with(HttpWishlistApi, wishlist, token, listing));
}

/// Remove a listing from the wishlist. The list changes only if the remote
/// call succeeds.
pub fn remove(session: SessionSignal, wishlist: WishlistSignal, listing_id: String) {
    let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
        return;
    };
    leptos::task::spawn_local(remove_with(HttpWishlistApi, wishlist, token, listing_id));
}

async fn refresh_with<A: WishlistApi>(api: A, wishlist: WishlistSignal, token: String) {
    let Some(epoch) = wishlist.try_update(|w| w.begin_refresh()) else {
        return;
    };

    if let Some(items) = cache::load() {
        wishlist.update(|w| {
            w.finish_refresh(epoch, items);
        });
        return;
    }

    match resolve_items(&api, &token).await {
        Ok(items) => {
            cache::store(&items);
            wishlist.update(|w| {
                if !w.finish_refresh(epoch, items) {
                    log::debug!("dropping stale wishlist refresh");
                }
            });
        }
        Err(err) => {
            log::warn!("wishlist refresh failed: {err}");
            wishlist.update(|w| w.abort_refresh(epoch));
        }
    }
}

async fn add_with<A: WishlistApi>(api: A, wishlist: WishlistSignal, token: String, listing: Listing) {
    let epoch = wishlist.with_untracked(WishlistState::epoch);
    match api.add(&token, &listing.id).await {
        Ok(()) => {
            cache::clear();
            wishlist.update(|w| {
                if !w.confirm_add(epoch, listing) {
                    log::debug!("dropping stale wishlist add");
                }
            });
        }
        Err(err) => log::warn!("could not add {} to wishlist: {err}", listing.id),
    }
}

async fn remove_with<A: WishlistApi>(
    api: A,
    wishlist: WishlistSignal,
    token: String,
    listing_id: String,
) {
    let epoch = wishlist.with_untracked(WishlistState::epoch);
    match api.remove(&token, &listing_id).await {
        Ok(()) => {
            cache::clear();
            wishlist.update(|w| {
                if !w.confirm_remove(epoch, &listing_id) {
                    log::debug!("dropping stale wishlist remove");
                }
            });
        }
        Err(err) => log::warn!("could not remove {listing_id} from wishlist: {err}"),
    }
}
