//! Gate that renders protected pages only for an authenticated session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionSignal;

/// Renders its children only while the session is authenticated; otherwise
/// redirects to `/login`. The attempted location is discarded, so there is
/// no "return to this page after login".
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.with(|s| s.is_authenticated()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            {children()}
        </Show>
    }
}
