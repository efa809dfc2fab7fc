//! Profile page (protected): view and edit the logged-in user's profile.

use leptos::prelude::*;

use crate::net;
use crate::net::types::UserProfile;
use crate::state::session::SessionSignal;

/// Profile editor: username, campus, profile picture, and a password change
/// section. Edits go out as multipart so the picture can ride along.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let profile = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move {
            match token {
                Some(token) => net::users::current_user(&token).await,
                None => None,
            }
        }
    });

    view! {
        <div class="profile-page">
            <h1>"My profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|maybe_user| match maybe_user {
                            Some(user) => view! { <ProfileEditor user=user/> }.into_any(),
                            None => {
                                view! {
                                    <p class="profile-page__error">"Could not load your profile."</p>
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
fn ProfileEditor(user: UserProfile) -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let username = RwSignal::new(user.username.clone());
    let location = RwSignal::new(user.location.clone().unwrap_or_default());
    let alert = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
                return;
            };
            let picture = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("profile-picture"))
                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            leptos::task::spawn_local(async move {
                let result = net::users::edit_profile(
                    &token,
                    &username.get_untracked(),
                    &location.get_untracked(),
                    picture.as_ref(),
                )
                .await;
                match result {
                    Ok(_) => notice.set("Profile updated.".to_owned()),
                    Err(err) => alert.set(err.to_string()),
                }
            });
        }
    };

    let on_change_password = move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = net::users::change_password(
                &token,
                &current_password.get_untracked(),
                &new_password.get_untracked(),
            )
            .await;
            match result {
                Ok(message) => {
                    notice.set(message);
                    current_password.set(String::new());
                    new_password.set(String::new());
                }
                Err(err) => alert.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="profile-editor">
            <Show when=move || !alert.get().is_empty()>
                <div class="alert alert--error">{move || alert.get()}</div>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <div class="alert alert--info">{move || notice.get()}</div>
            </Show>

            <p class="profile-editor__email">{user.email.clone()}</p>

            <form class="profile-editor__form" on:submit=on_save>
                <label class="profile-editor__label">
                    "Username"
                    <input
                        class="profile-editor__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-editor__label">
                    "Campus / location"
                    <input
                        class="profile-editor__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-editor__label">
                    "Profile picture"
                    <input id="profile-picture" type="file" accept="image/*"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Save changes"
                </button>
            </form>

            <h2>"Change password"</h2>
            <div class="profile-editor__form">
                <label class="profile-editor__label">
                    "Current password"
                    <input
                        class="profile-editor__input"
                        type="password"
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-editor__label">
                    "New password"
                    <input
                        class="profile-editor__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=on_change_password>
                    "Update password"
                </button>
            </div>
        </div>
    }
}
