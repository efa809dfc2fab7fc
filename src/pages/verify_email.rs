//! Email verification landing page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net;

/// Submits the verification token from the route to the users service and
/// shows the outcome, with a resend form for expired tokens.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let params = use_params_map();
    let token = move || params.with(|p| p.get("token").unwrap_or_default());

    let outcome = LocalResource::new(move || {
        let token = token();
        async move { net::users::verify_email(&token).await }
    });

    let resend_email = RwSignal::new(String::new());
    let resend_notice = RwSignal::new(String::new());

    let on_resend = move |_| {
        leptos::task::spawn_local(async move {
            match net::users::resend_verification(&resend_email.get_untracked()).await {
                Ok(message) | Err(crate::net::error::ApiError::Server(message)) => {
                    resend_notice.set(message);
                }
                Err(err) => resend_notice.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Email verification"</h1>

            <Suspense fallback=move || view! { <p>"Verifying..."</p> }>
                {move || {
                    outcome
                        .get()
                        .map(|result| match result {
                            Ok(message) => {
                                view! {
                                    <div class="alert alert--info">
                                        {message} " You can now " <a href="/login">"sign in"</a> "."
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="alert alert--error">{err.to_string()}</div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="auth-page__resend">
                <p>"Link expired? Request a new one:"</p>
                <input
                    class="auth-page__input"
                    type="email"
                    placeholder="you@mail.utoronto.ca"
                    prop:value=move || resend_email.get()
                    on:input=move |ev| resend_email.set(event_target_value(&ev))
                />
                <button class="btn" on:click=on_resend>
                    "Resend verification email"
                </button>
                <Show when=move || !resend_notice.get().is_empty()>
                    <p class="auth-page__notice">{move || resend_notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
