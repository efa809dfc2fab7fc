use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::Listing;
use crate::state::session::Session;
use crate::util::storage::LocalTokenStore;

fn listing(id: &str, title: &str) -> Listing {
    Listing {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        price: 20.0,
        image_url: None,
        images: Vec::new(),
        location: "Mississauga".to_owned(),
        condition: "Used".to_owned(),
        date_posted: "2024-11-02".to_owned(),
        seller_id: "u-1".to_owned(),
        seller_name: "sam".to_owned(),
        category: "Books".to_owned(),
    }
}

fn confirm_add_now(state: &mut WishlistState, item: Listing) {
    let epoch = state.epoch();
    assert!(state.confirm_add(epoch, item));
}

fn seed(wishlist: WishlistSignal, item: Listing) {
    wishlist.update(|w| confirm_add_now(w, item));
}

/// Scriptable in-memory stand-in for the two remote services.
#[derive(Default)]
struct FakeApi {
    ids: Vec<String>,
    listings: HashMap<String, Listing>,
    fail_ids: bool,
    fail_mutations: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    fn with_listings(entries: &[(&str, &str)]) -> Self {
        let mut api = Self::default();
        for (id, title) in entries {
            api.ids.push((*id).to_owned());
            api.listings.insert((*id).to_owned(), listing(id, title));
        }
        api
    }
}

impl WishlistApi for FakeApi {
    async fn wishlist_ids(&self, _token: &str) -> Result<Vec<String>, ApiError> {
        self.calls.borrow_mut().push("ids".to_owned());
        if self.fail_ids {
            return Err(ApiError::Unknown);
        }
        Ok(self.ids.clone())
    }

    async fn listing_by_id(&self, id: &str) -> Result<Listing, ApiError> {
        self.calls.borrow_mut().push(format!("listing {id}"));
        self.listings
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::Server("Listing not found".to_owned()))
    }

    async fn add(&self, _token: &str, listing_id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("add {listing_id}"));
        if self.fail_mutations {
            return Err(ApiError::Server("Wishlist update failed".to_owned()));
        }
        Ok(())
    }

    async fn remove(&self, _token: &str, listing_id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("remove {listing_id}"));
        if self.fail_mutations {
            return Err(ApiError::Server("Wishlist update failed".to_owned()));
        }
        Ok(())
    }
}

// =============================================================
// WishlistState transitions
// =============================================================

#[test]
fn wishlist_state_defaults_empty() {
    let state = WishlistState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn membership_follows_confirmed_mutations() {
    let mut state = WishlistState::default();
    assert!(!state.is_item_wishlisted("L1"));

    confirm_add_now(&mut state, listing("L1", "X"));
    assert!(state.is_item_wishlisted("L1"));

    let epoch = state.epoch();
    assert!(state.confirm_remove(epoch, "L1"));
    assert!(!state.is_item_wishlisted("L1"));
}

#[test]
fn confirm_add_does_not_duplicate() {
    let mut state = WishlistState::default();
    confirm_add_now(&mut state, listing("L1", "X"));
    confirm_add_now(&mut state, listing("L1", "X"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn confirm_remove_of_absent_id_is_noop() {
    let mut state = WishlistState::default();
    confirm_add_now(&mut state, listing("L1", "X"));
    let epoch = state.epoch();
    assert!(state.confirm_remove(epoch, "L2"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_refresh_result_is_dropped() {
    let mut state = WishlistState::default();
    let first = state.begin_refresh();
    let second = state.begin_refresh();

    // The older refresh resolves late; its result must not publish.
    assert!(!state.finish_refresh(first, vec![listing("L1", "old")]));
    assert!(state.items.is_empty());

    assert!(state.finish_refresh(second, vec![listing("L2", "new")]));
    assert!(state.is_item_wishlisted("L2"));
    assert!(!state.loading);
}

#[test]
fn clear_invalidates_in_flight_refresh() {
    let mut state = WishlistState::default();
    let epoch = state.begin_refresh();
    state.clear();

    assert!(!state.finish_refresh(epoch, vec![listing("L1", "X")]));
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn mutation_confirmed_after_clear_is_dropped() {
    let mut state = WishlistState::default();
    let epoch = state.epoch();

    // Logout cleared the list while the add was in flight.
    state.clear();
    assert!(!state.confirm_add(epoch, listing("L1", "X")));
    assert!(state.items.is_empty());
}

#[test]
fn mutation_confirmed_after_newer_refresh_is_dropped() {
    let mut state = WishlistState::default();
    confirm_add_now(&mut state, listing("L1", "X"));
    let epoch = state.epoch();

    let _ = state.begin_refresh();
    assert!(!state.confirm_remove(epoch, "L1"));
    assert!(state.is_item_wishlisted("L1"));
}

#[test]
fn abort_refresh_only_clears_current_loading() {
    let mut state = WishlistState::default();
    let first = state.begin_refresh();
    let second = state.begin_refresh();

    state.abort_refresh(first);
    assert!(state.loading);

    state.abort_refresh(second);
    assert!(!state.loading);
}

// =============================================================
// resolve_items
// =============================================================

#[test]
fn resolve_items_keeps_arrival_order() {
    let api = FakeApi::with_listings(&[("L1", "X"), ("L2", "Y")]);
    let items = block_on(resolve_items(&api, "t1")).expect("resolve");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "L1");
    assert_eq!(items[0].title, "X");
    assert_eq!(items[1].id, "L2");
}

#[test]
fn resolve_items_skips_dangling_ids() {
    let mut api = FakeApi::with_listings(&[("L1", "X")]);
    api.ids.push("gone".to_owned());

    let items = block_on(resolve_items(&api, "t1")).expect("resolve");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "L1");
}

#[test]
fn resolve_items_propagates_id_fetch_failure() {
    let api = FakeApi {
        fail_ids: true,
        ..FakeApi::default()
    };
    assert!(block_on(resolve_items(&api, "t1")).is_err());
}

// =============================================================
// Signal-level flows
// =============================================================

#[test]
fn refresh_publishes_resolved_items() {
    let api = FakeApi::with_listings(&[("L1", "X")]);
    let wishlist = RwSignal::new(WishlistState::default());

    block_on(refresh_with(api, wishlist, "t1".to_owned()));

    let state = wishlist.get_untracked();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "X");
    assert!(!state.loading);
}

#[test]
fn failed_refresh_leaves_items_unchanged() {
    let wishlist = RwSignal::new(WishlistState::default());
    seed(wishlist, listing("L9", "kept"));

    let api = FakeApi {
        fail_ids: true,
        ..FakeApi::default()
    };
    block_on(refresh_with(api, wishlist, "t1".to_owned()));

    let state = wishlist.get_untracked();
    assert!(state.is_item_wishlisted("L9"));
    assert!(!state.loading);
}

#[test]
fn confirmed_add_appends_without_refetch() {
    let api = FakeApi::default();
    let wishlist = RwSignal::new(WishlistState::default());

    block_on(add_with(api, wishlist, "t1".to_owned(), listing("L1", "X")));

    assert!(wishlist.get_untracked().is_item_wishlisted("L1"));
}

#[test]
fn rejected_add_leaves_membership_false() {
    let api = FakeApi {
        fail_mutations: true,
        ..FakeApi::default()
    };
    let wishlist = RwSignal::new(WishlistState::default());

    block_on(add_with(api, wishlist, "t1".to_owned(), listing("L1", "X")));

    assert!(!wishlist.get_untracked().is_item_wishlisted("L1"));
}

#[test]
fn confirmed_remove_filters_item_out() {
    let api = FakeApi::default();
    let wishlist = RwSignal::new(WishlistState::default());
    seed(wishlist, listing("L1", "X"));

    block_on(remove_with(api, wishlist, "t1".to_owned(), "L1".to_owned()));

    assert!(!wishlist.get_untracked().is_item_wishlisted("L1"));
}

#[test]
fn rejected_remove_keeps_item() {
    let api = FakeApi {
        fail_mutations: true,
        ..FakeApi::default()
    };
    let wishlist = RwSignal::new(WishlistState::default());
    seed(wishlist, listing("L1", "X"));

    block_on(remove_with(api, wishlist, "t1".to_owned(), "L1".to_owned()));

    assert!(wishlist.get_untracked().is_item_wishlisted("L1"));
}

#[test]
fn unauthenticated_refresh_empties_without_network() {
    let session = RwSignal::new(Session::<LocalTokenStore>::default());
    let wishlist = RwSignal::new(WishlistState::default());
    seed(wishlist, listing("L1", "X"));

    // Outside the browser the store is always empty, so the session is
    // unauthenticated and refresh must clear synchronously.
    refresh(session, wishlist);

    assert!(wishlist.get_untracked().items.is_empty());
    assert!(!wishlist.get_untracked().loading);
}
