//! Home page: the browse feed with search.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::search_bar::SearchBar;

/// Listing feed. An empty query shows everything from the listings service;
/// a non-empty query goes to the search service instead.
#[component]
pub fn HomePage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    let listings = LocalResource::new(move || {
        let q = query.get();
        async move {
            if q.is_empty() {
                crate::net::listings::fetch_all().await
            } else {
                crate::net::listings::search(&q).await
            }
        }
    });

    view! {
        <div class="home-page">
            <SearchBar query=query/>

            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    listings
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="home-page__empty">"No listings found."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="home-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|l| view! { <ListingCard listing=l/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                log::warn!("could not load listings: {err}");
                                view! {
                                    <p class="home-page__error">"Could not load listings."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
