//! Public profile page: a seller and their listings.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::listing_card::ListingCard;

/// Shows a user's public profile next to everything they have listed.
#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params_map();
    let username = move || params.with(|p| p.get("username").unwrap_or_default());

    let page = LocalResource::new(move || {
        let username = username();
        async move {
            let Some(user) = crate::net::users::user_by_username(&username).await else {
                return None;
            };
            let listings = crate::net::listings::fetch_by_user(&user.id)
                .await
                .unwrap_or_default();
            Some((user, listings))
        }
    });

    view! {
        <div class="user-page">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    page.get()
                        .map(|maybe| match maybe {
                            Some((user, listings)) => {
                                view! {
                                    <header class="user-page__header">
                                        <h1>{user.username.clone()}</h1>
                                        {user
                                            .location
                                            .clone()
                                            .map(|loc| {
                                                view! { <p class="user-page__location">{loc}</p> }
                                            })}
                                    </header>
                                    <div class="user-page__grid">
                                        {listings
                                            .into_iter()
                                            .map(|l| view! { <ListingCard listing=l/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="user-page__error">"User not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
