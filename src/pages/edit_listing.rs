//! Edit-listing page (protected): update or delete an existing listing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Listing;
use crate::state::session::SessionSignal;

/// Loads the listing and hands it to the edit form.
#[component]
pub fn EditListingPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let listing = LocalResource::new(move || {
        let id = id();
        async move { crate::net::listings::fetch_by_id(&id).await }
    });

    view! {
        <div class="listing-form-page">
            <h1>"Edit listing"</h1>
            <Suspense fallback=move || view! { <p>"Loading listing..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Ok(l) => view! { <EditListingForm listing=l/> }.into_any(),
                            Err(err) => {
                                view! {
                                    <p class="listing-form-page__error">{err.to_string()}</p>
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
fn EditListingForm(listing: Listing) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let listing_id = StoredValue::new(listing.id.clone());
    let title = RwSignal::new(listing.title.clone());
    let description = RwSignal::new(listing.description.clone());
    let price = RwSignal::new(format!("{:.2}", listing.price));
    let category = RwSignal::new(listing.category.clone());
    let condition = RwSignal::new(listing.condition.clone());
    let location = RwSignal::new(listing.location.clone());
    let alert = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if price.get_untracked().trim().parse::<f64>().is_err() {
            alert.set("Please enter a valid price.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
                return;
            };
            let images = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("listing-images"))
                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let fields = crate::net::listings::ListingFields {
                    title: &title.get_untracked(),
                    description: &description.get_untracked(),
                    price: &price.get_untracked(),
                    category: &category.get_untracked(),
                    condition: &condition.get_untracked(),
                    location: &location.get_untracked(),
                };
                let id = listing_id.get_value();
                match crate::net::listings::edit(&token, &id, fields, images.as_ref()).await {
                    Ok(_) => navigate(&format!("/listing/{id}"), NavigateOptions::default()),
                    Err(err) => alert.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    let nav_delete = use_navigate();
    let on_delete = move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let navigate = nav_delete.clone();
        let id = listing_id.get_value();
        leptos::task::spawn_local(async move {
            match crate::net::listings::delete(&token, &id).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(err) => alert.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="listing-form">
            <Show when=move || !alert.get().is_empty()>
                <div class="alert alert--error">{move || alert.get()}</div>
            </Show>

            <form on:submit=on_submit>
                <label class="listing-form__label">
                    "Title"
                    <input
                        class="listing-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label class="listing-form__label">
                    "Description"
                    <textarea
                        class="listing-form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="listing-form__label">
                    "Price (CAD)"
                    <input
                        class="listing-form__input"
                        type="number"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label class="listing-form__label">
                    "Category"
                    <input
                        class="listing-form__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__label">
                    "Condition"
                    <input
                        class="listing-form__input"
                        type="text"
                        prop:value=move || condition.get()
                        on:input=move |ev| condition.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__label">
                    "Pickup location"
                    <input
                        class="listing-form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="listing-form__label">
                    "Replace photos"
                    <input id="listing-images" type="file" accept="image/*" multiple/>
                </label>
                <div class="listing-form__actions">
                    <button class="btn btn--primary" type="submit">
                        "Save changes"
                    </button>
                    <button class="btn btn--danger" type="button" on:click=on_delete>
                        "Delete listing"
                    </button>
                </div>
            </form>
        </div>
    }
}
