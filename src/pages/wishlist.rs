//! Wishlist page (protected): the items the user has marked for later.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::state::wishlist::WishlistSignal;

/// Renders the in-memory wishlist. The data itself is maintained by the
/// wishlist controller reacting to session changes; this page only reads.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = expect_context::<WishlistSignal>();

    let count_label = move || {
        let count = wishlist.with(|w| w.items.len());
        if count == 1 {
            "1 item in your wishlist".to_owned()
        } else {
            format!("{count} items in your wishlist")
        }
    };

    view! {
        <div class="wishlist-page">
            <h1>"My Wishlist"</h1>

            <Show
                when=move || !wishlist.with(|w| w.loading)
                fallback=|| view! { <p>"Loading wishlist..."</p> }
            >
                <Show
                    when=move || !wishlist.with(|w| w.items.is_empty())
                    fallback=|| {
                        view! {
                            <p class="wishlist-page__empty">
                                "Your wishlist is empty. Browse listings and click the heart icon to add items to your wishlist."
                            </p>
                        }
                    }
                >
                    <p class="wishlist-page__count">{count_label}</p>
                    <div class="wishlist-page__grid">
                        {move || {
                            wishlist
                                .get()
                                .items
                                .into_iter()
                                .map(|l| view! { <ListingCard listing=l/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
