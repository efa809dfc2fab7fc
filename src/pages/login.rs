//! Login page: email + password form exchanging credentials for a token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net;
use crate::state::session::SessionSignal;
use crate::util::validate::is_valid_email;

/// Sign-in form. A successful login stores the bearer token through the
/// session controller and navigates home; failures fill the alert region
/// with the server's error string.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let alert = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !is_valid_email(&email.get_untracked()) {
            alert.set("Please enter a valid email address.".to_owned());
            return;
        }
        alert.set(String::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match net::users::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(token) => {
                    session.update(|s| s.login(&token));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => alert.set(err.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"CampusHub"</h1>
            <p class="auth-page__subtitle">"Sign in to your account"</p>

            <Show when=move || !alert.get().is_empty()>
                <div class="alert alert--error">{move || alert.get()}</div>
            </Show>

            <form class="auth-page__form" on:submit=on_submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        required
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-page__footer">
                "No account yet? " <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
