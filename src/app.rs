//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    create_listing::CreateListingPage, edit_listing::EditListingPage, home::HomePage,
    listing::ListingPage, login::LoginPage, profile::ProfilePage, signup::SignupPage,
    user::UserPage, verify_email::VerifyEmailPage, wishlist::WishlistPage,
};
use crate::state::session::{Session, SessionSignal};
use crate::state::wishlist::{self, WishlistSignal, WishlistState};
use crate::util::storage::{LocalTokenStore, on_storage_change};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and wishlist contexts, wires the cross-tab storage
/// subscription and the auth-driven wishlist refresh, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session state is initialized from the persisted store, so a reload
    // keeps the user logged in.
    let session: SessionSignal = RwSignal::new(Session::new(LocalTokenStore));
    let wishlist_items: WishlistSignal = RwSignal::new(WishlistState::default());

    provide_context(session);
    provide_context(wishlist_items);

    // Another tab mutating the shared store is the only way one tab learns
    // about another's login or logout; re-derive from the store when it fires.
    on_storage_change(move || {
        session.update(|s| {
            s.sync_from_store();
        });
    });

    // The wishlist follows the auth flag: cleared on logout, refetched on
    // login and on the initial mount.
    Effect::new(move || {
        let _ = session.with(|s| s.is_authenticated());
        wishlist::refresh(session, wishlist_items);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campushub.css"/>
        <Title text="CampusHub"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=(StaticSegment("verify"), ParamSegment("token"))
                    view=VerifyEmailPage
                />
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("listing"), ParamSegment("id")) view=ListingPage/>
                <Route path=(StaticSegment("users"), ParamSegment("username")) view=UserPage/>
                <Route
                    path=StaticSegment("wishlist")
                    view=|| view! { <RequireAuth><WishlistPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("create")
                    view=|| view! { <RequireAuth><CreateListingPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><EditListingPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
