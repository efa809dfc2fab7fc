//! Create-listing page (protected).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionSignal;

/// New listing form. Submits multipart (fields + image files) and navigates
/// to the created listing on success.
#[component]
pub fn CreateListingPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let condition = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let alert = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get_untracked().trim().is_empty() {
            alert.set("Please give your listing a title.".to_owned());
            return;
        }
        if price.get_untracked().trim().parse::<f64>().is_err() {
            alert.set("Please enter a valid price.".to_owned());
            return;
        }
        alert.set(String::new());

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

            pending.set(true);
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
                match crate::net::listings::create(&token, fields, images.as_ref()).await {
                    Ok(created) => {
                        navigate(&format!("/listing/{}", created.id), NavigateOptions::default());
                    }
                    Err(err) => alert.set(err.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="listing-form-page">
            <h1>"Sell an item"</h1>

            <Show when=move || !alert.get().is_empty()>
                <div class="alert alert--error">{move || alert.get()}</div>
            </Show>

            <form class="listing-form" on:submit=on_submit>
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
                    "Photos"
                    <input id="listing-images" type="file" accept="image/*" multiple/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Publishing..." } else { "Publish listing" }}
                </button>
            </form>
        </div>
    }
}
