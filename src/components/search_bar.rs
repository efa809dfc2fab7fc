//! Search input driving the search service.

use leptos::prelude::*;

/// Search bar — submits the query on Enter or button click. An empty query
/// resets the caller back to the full listing feed.
#[component]
pub fn SearchBar(query: RwSignal<String>) -> impl IntoView {
    let draft = RwSignal::new(query.get_untracked());

    let submit = move || query.set(draft.get().trim().to_owned());

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search listings..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button class="btn" on:click=move |_| submit()>
                "Search"
            </button>
        </div>
    }
}
