//! REST helpers for the users/auth service.
//!
//! Registration, email verification, login/logout, password management,
//! profile lookups, and the per-user wishlist (ids only; resolution against
//! the listings service happens in `state::wishlist`).
//!
//! ERROR HANDLING
//! ==============
//! Auth-style calls return `Result<_, ApiError>` so forms can show the
//! server's error string; profile lookups return `Option` so a missing or
//! anonymous user degrades to an empty view instead of an error path.

use super::error::ApiError;
use super::types::UserProfile;
use crate::state::wishlist::WishlistApi;

#[cfg(feature = "hydrate")]
use super::types::{ApiMessage, ExistsResponse, LoginRequest, LoginResponse, WishlistResponse};
#[cfg(feature = "hydrate")]
use super::{USERS_SERVICE_URL, decode, net_err};

/// Exchange credentials for a bearer token via `POST /login`.
///
/// # Errors
///
/// Returns the server's error string for rejected credentials, or
/// `ApiError::Unknown` when the failure shape is unrecognized.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/login"))
            .json(&LoginRequest { email, password })
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        let body: LoginResponse = decode(resp).await?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        super::unavailable()
    }
}

/// Invalidate the bearer token server-side via `POST /logout`.
///
/// Callers treat this as fire-and-forget; the local session is cleared
/// regardless of the outcome.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/logout"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Start registration via `POST /pre_register`; the account is created once
/// the emailed verification link is followed.
///
/// # Errors
///
/// Returns the server's error string (duplicate username, invalid email, ...).
pub async fn pre_register(req: &super::types::PreRegisterRequest<'_>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/pre_register"))
            .json(req)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        let body: ApiMessage = decode(resp).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        super::unavailable()
    }
}

/// Confirm an email address via `GET /verify_email/{token}`.
///
/// # Errors
///
/// Returns the server's error string for expired or unknown tokens.
pub async fn verify_email(token: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/verify_email/{token}"))
                .send()
                .await
                .map_err(net_err)?;
        let body: ApiMessage = decode(resp).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        super::unavailable()
    }
}

/// Re-send the verification email via `POST /resend_verification`.
///
/// # Errors
///
/// Returns the server's error string if the address is unknown.
pub async fn resend_verification(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/resend_verification"))
                .json(&serde_json::json!({ "email": email }))
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
        let body: ApiMessage = decode(resp).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        super::unavailable()
    }
}

/// Request a password-reset email via `POST /request_password_reset`.
///
/// # Errors
///
/// Returns the server's error string if the address is unknown.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/request_password_reset"))
                .json(&serde_json::json!({ "email": email }))
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
        let body: ApiMessage = decode(resp).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        super::unavailable()
    }
}

/// Change the password of the logged-in user via `POST /change_password`.
///
/// # Errors
///
/// Returns the server's error string when the current password is wrong.
pub async fn change_password(
    token: &str,
    current: &str,
    new: &str,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/change_password"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(&serde_json::json!({ "current_password": current, "new_password": new }))
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        let body: ApiMessage = decode(resp).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current, new);
        super::unavailable()
    }
}

/// Check username availability via `GET /check_username/{username}`.
///
/// # Errors
///
/// Returns a network error if the service is unreachable.
pub async fn username_exists(username: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/check_username/{username}"))
                .send()
                .await
                .map_err(net_err)?;
        let body: ExistsResponse = decode(resp).await?;
        Ok(body.exists)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        super::unavailable()
    }
}

/// Check email availability via `GET /check_email/{email}`.
///
/// # Errors
///
/// Returns a network error if the service is unreachable.
pub async fn email_exists(email: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/check_email/{email}"))
                .send()
                .await
                .map_err(net_err)?;
        let body: ExistsResponse = decode(resp).await?;
        Ok(body.exists)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        super::unavailable()
    }
}

/// Fetch the profile of the bearer-token owner from `GET /profile`.
/// Returns `None` if the token is rejected or on the server.
pub async fn current_user(token: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/profile"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch a public profile from `GET /users/{username}`.
/// Returns `None` for unknown usernames or on the server.
pub async fn user_by_username(username: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/users/{username}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Update the profile via `PUT /profile` (multipart, optional picture).
///
/// # Errors
///
/// Returns the server's error string for rejected edits.
#[cfg(feature = "hydrate")]
pub async fn edit_profile(
    token: &str,
    username: &str,
    location: &str,
    picture: Option<&web_sys::File>,
) -> Result<UserProfile, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    let _ = form.append_with_str("username", username);
    let _ = form.append_with_str("location", location);
    if let Some(file) = picture {
        let _ = form.append_with_blob_and_filename("profile_picture", file, &file.name());
    }

    let resp = gloo_net::http::Request::put(&format!("{USERS_SERVICE_URL}/profile"))
        .header("Authorization", &format!("Bearer {token}"))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(resp).await
}

/// Fetch the wishlisted listing ids from `GET /wishlist`.
///
/// # Errors
///
/// Returns the server's error string for rejected tokens.
pub async fn fetch_wishlist_ids(token: &str) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{USERS_SERVICE_URL}/wishlist"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(net_err)?;
        let body: WishlistResponse = decode(resp).await?;
        Ok(body.wishlist)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        super::unavailable()
    }
}

/// Add a listing id to the wishlist via `POST /wishlist/{id}`.
///
/// # Errors
///
/// Returns the server's error string when the add is rejected.
pub async fn add_to_wishlist(token: &str, listing_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{USERS_SERVICE_URL}/wishlist/{listing_id}"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(net_err)?;
        if !resp.ok() {
            return Err(super::error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, listing_id);
        super::unavailable()
    }
}

/// Remove a listing id from the wishlist via `DELETE /wishlist/{id}`.
///
/// # Errors
///
/// Returns the server's error string when the remove is rejected.
pub async fn remove_from_wishlist(token: &str, listing_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::delete(&format!("{USERS_SERVICE_URL}/wishlist/{listing_id}"))
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(net_err)?;
        if !resp.ok() {
            return Err(super::error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, listing_id);
        super::unavailable()
    }
}

/// The production [`WishlistApi`]: wishlist membership lives on the users
/// service, listing resolution on the listings service.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpWishlistApi;

impl WishlistApi for HttpWishlistApi {
    async fn wishlist_ids(&self, token: &str) -> Result<Vec<String>, ApiError> {
        fetch_wishlist_ids(token).await
    }

    async fn listing_by_id(&self, id: &str) -> Result<super::types::Listing, ApiError> {
        super::listings::fetch_by_id(id).await
    }

    async fn add(&self, token: &str, listing_id: &str) -> Result<(), ApiError> {
        add_to_wishlist(token, listing_id).await
    }

    async fn remove(&self, token: &str, listing_id: &str) -> Result<(), ApiError> {
        remove_from_wishlist(token, listing_id).await
    }
}
