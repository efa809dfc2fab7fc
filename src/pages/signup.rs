//! Signup page: pre-registration form; the account activates once the
//! emailed verification link is followed.

use leptos::prelude::*;

use crate::net;
use crate::net::types::PreRegisterRequest;
use crate::util::validate::{MIN_PASSWORD_LEN, is_valid_email, is_valid_password, is_valid_username};

/// Registration form with local field checks and remote availability checks
/// before `pre_register`. On success the form is replaced by a
/// check-your-inbox notice.
#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let alert = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !is_valid_username(&username.get_untracked()) {
            alert.set("Please choose a username without spaces.".to_owned());
            return;
        }
        if !is_valid_email(&email.get_untracked()) {
            alert.set("Please enter a valid email address.".to_owned());
            return;
        }
        if !is_valid_password(&password.get_untracked()) {
            alert.set(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
            return;
        }
        alert.set(String::new());
        pending.set(true);

        leptos::task::spawn_local(async move {
            let result = signup_flow(
                &username.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                &location.get_untracked(),
            )
            .await;
            match result {
                Ok(()) => submitted.set(true),
                Err(message) => alert.set(message),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>

            <Show when=move || !alert.get().is_empty()>
                <div class="alert alert--error">{move || alert.get()}</div>
            </Show>

            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="alert alert--info">
                            "Almost there! Check your inbox for a verification link."
                        </div>
                    }
                }
            >
                <form class="auth-page__form" on:submit=on_submit>
                    <label class="auth-page__label">
                        "Username"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                        />
                    </label>
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
                    <label class="auth-page__label">
                        "Campus / location"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

/// Availability checks followed by pre-registration. Returns the message to
/// show on failure.
async fn signup_flow(
    username: &str,
    email: &str,
    password: &str,
    location: &str,
) -> Result<(), String> {
    if net::users::username_exists(username).await.unwrap_or(false) {
        return Err("That username is already taken.".to_owned());
    }
    if net::users::email_exists(email).await.unwrap_or(false) {
        return Err("An account with that email already exists.".to_owned());
    }
    net::users::pre_register(&PreRegisterRequest {
        username,
        email,
        password,
        location,
    })
    .await
    .map(|_| ())
    .map_err(|err| err.to_string())
}
