//! Card component for a single listing in any grid view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Listing;
use crate::state::session::SessionSignal;
use crate::state::wishlist;
use crate::state::wishlist::WishlistSignal;

/// A clickable listing card with a wishlist heart toggle.
///
/// Anonymous users get a sign-in dialog instead of navigation or wishlist
/// mutation; the toggle itself goes through the wishlist controller, so the
/// heart only flips once the remote call has succeeded.
#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let wishlist_items = expect_context::<WishlistSignal>();
    let navigate = use_navigate();

    let show_login_dialog = RwSignal::new(false);

    let card = StoredValue::new(listing);
    let listing_id = move || card.with_value(|l| l.id.clone());

    let is_wishlisted = move || wishlist_items.with(|w| w.is_item_wishlisted(&listing_id()));

    let on_heart = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !session.with_untracked(|s| s.is_authenticated()) {
            show_login_dialog.set(true);
            return;
        }
        if is_wishlisted() {
            wishlist::remove(session, wishlist_items, listing_id());
        } else {
            wishlist::add(session, wishlist_items, card.get_value());
        }
    };

    let nav = navigate.clone();
    let on_card = move |_| {
        if session.with_untracked(|s| s.is_authenticated()) {
            nav(&format!("/listing/{}", listing_id()), NavigateOptions::default());
        } else {
            show_login_dialog.set(true);
        }
    };

    let nav_login = navigate.clone();
    let on_login = move |_| {
        show_login_dialog.set(false);
        nav_login("/login", NavigateOptions::default());
    };
    let nav_signup = navigate;
    let on_signup = move |_| {
        show_login_dialog.set(false);
        nav_signup("/signup", NavigateOptions::default());
    };

    view! {
        <div class="listing-card" on:click=on_card>
            <img
                class="listing-card__image"
                src=move || card.with_value(|l| l.display_image().to_owned())
                alt=move || card.with_value(|l| l.title.clone())
            />
            <div class="listing-card__body">
                <span class="listing-card__title">{move || card.with_value(|l| l.title.clone())}</span>
                <span class="listing-card__price">
                    {move || card.with_value(|l| format!("${:.2}", l.price))}
                </span>
                <span class="listing-card__location">
                    {move || card.with_value(|l| l.location.clone())}
                </span>
            </div>
            <button
                class="listing-card__heart"
                class:listing-card__heart--active=is_wishlisted
                title="Wishlist"
                on:click=on_heart
            >
                {move || if is_wishlisted() { "\u{2665}" } else { "\u{2661}" }}
            </button>

            <Show when=move || show_login_dialog.get()>
                <div class="dialog-backdrop" on:click=move |ev| {
                    ev.stop_propagation();
                    show_login_dialog.set(false);
                }>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Sign in required"</h2>
                        <p>"Please sign in or create an account to add items to your wishlist."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=on_login.clone()>
                                "Sign in"
                            </button>
                            <button class="btn btn--primary" on:click=on_signup.clone()>
                                "Sign up"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
