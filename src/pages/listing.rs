//! Listing detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Listing;
use crate::state::session::SessionSignal;
use crate::state::wishlist;
use crate::state::wishlist::WishlistSignal;

/// Full listing view with a wishlist toggle and a link to the seller's
/// other listings. Sellers see an edit link on their own listings.
#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let listing = LocalResource::new(move || {
        let id = id();
        async move { crate::net::listings::fetch_by_id(&id).await }
    });

    view! {
        <div class="listing-page">
            <Suspense fallback=move || view! { <p>"Loading listing..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Ok(l) => view! { <ListingDetail listing=l/> }.into_any(),
                            Err(err) => {
                                view! {
                                    <p class="listing-page__error">{err.to_string()}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ListingDetail(listing: Listing) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let wishlist_items = expect_context::<WishlistSignal>();

    let detail = StoredValue::new(listing);
    let listing_id = move || detail.with_value(|l| l.id.clone());
    let is_wishlisted = move || wishlist_items.with(|w| w.is_item_wishlisted(&listing_id()));

    // Only the seller gets the edit affordance.
    let viewer = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move {
            match token {
                Some(token) => crate::net::users::current_user(&token).await,
                None => None,
            }
        }
    });
    let is_owner = move || {
        viewer
            .get()
            .flatten()
            .is_some_and(|user| detail.with_value(|l| l.seller_id == user.id))
    };

    let on_toggle = move |_| {
        if !session.with_untracked(|s| s.is_authenticated()) {
            return;
        }
        if is_wishlisted() {
            wishlist::remove(session, wishlist_items, listing_id());
        } else {
            wishlist::add(session, wishlist_items, detail.get_value());
        }
    };

    view! {
        <article class="listing-detail">
            <img
                class="listing-detail__image"
                src=move || detail.with_value(|l| l.display_image().to_owned())
                alt=move || detail.with_value(|l| l.title.clone())
            />
            <div class="listing-detail__body">
                <h1>{move || detail.with_value(|l| l.title.clone())}</h1>
                <p class="listing-detail__price">
                    {move || detail.with_value(|l| format!("${:.2}", l.price))}
                </p>
                <dl class="listing-detail__facts">
                    <dt>"Condition"</dt>
                    <dd>{move || detail.with_value(|l| l.condition.clone())}</dd>
                    <dt>"Location"</dt>
                    <dd>{move || detail.with_value(|l| l.location.clone())}</dd>
                    <dt>"Category"</dt>
                    <dd>{move || detail.with_value(|l| l.category.clone())}</dd>
                    <dt>"Posted"</dt>
                    <dd>{move || detail.with_value(|l| l.date_posted.clone())}</dd>
                </dl>
                <p class="listing-detail__description">
                    {move || detail.with_value(|l| l.description.clone())}
                </p>
                <p class="listing-detail__seller">
                    "Sold by "
                    <a href=move || {
                        detail.with_value(|l| format!("/users/{}", l.seller_name))
                    }>{move || detail.with_value(|l| l.seller_name.clone())}</a>
                </p>
                <div class="listing-detail__actions">
                    <Show when=move || session.with(|s| s.is_authenticated())>
                        <button class="btn btn--primary" on:click=on_toggle>
                            {move || {
                                if is_wishlisted() {
                                    "Remove from wishlist"
                                } else {
                                    "Add to wishlist"
                                }
                            }}
                        </button>
                        <Show when=is_owner>
                            <a class="btn" href=move || format!("/edit/{}", listing_id())>
                                "Edit"
                            </a>
                        </Show>
                    </Show>
                </div>
            </div>
        </article>
    }
}
