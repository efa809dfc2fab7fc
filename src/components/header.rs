//! Top navigation bar with auth-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionSignal;

/// Site header: brand link plus navigation that follows the session state.
/// Logout clears the local session immediately; the server-side token
/// invalidation is fire-and-forget.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) {
            leptos::task::spawn_local(async move {
                crate::net::users::logout(&token).await;
            });
        }
        session.update(|s| s.logout());
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                "CampusHub"
            </a>
            <nav class="header__nav">
                <Show
                    when=move || session.with(|s| s.is_authenticated())
                    fallback=|| {
                        view! {
                            <a class="header__link" href="/login">
                                "Sign in"
                            </a>
                            <a class="header__link" href="/signup">
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a class="header__link" href="/wishlist">
                        "Wishlist"
                    </a>
                    <a class="header__link" href="/create">
                        "Sell an item"
                    </a>
                    <a class="header__link" href="/profile">
                        "Profile"
                    </a>
                    <button class="header__link header__link--button" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
