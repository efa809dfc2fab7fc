//! REST helpers and wire types for the three remote services.
//!
//! The client talks to independently addressed services: users/auth,
//! listings, and search. Client-side (hydrate) builds issue real HTTP calls
//! via `gloo-net`; server-side (SSR) builds get stubs returning `None` or an
//! error, since the endpoints are only meaningful in the browser.

pub mod error;
pub mod listings;
pub mod types;
pub mod users;

use error::ApiError;

/// Base URL of the users/auth service.
pub const USERS_SERVICE_URL: &str = match option_env!("CAMPUSHUB_USERS_URL") {
    Some(url) => url,
    None => "http://localhost:5002",
};

/// Base URL of the listings service.
pub const LISTINGS_SERVICE_URL: &str = match option_env!("CAMPUSHUB_LISTINGS_URL") {
    Some(url) => url,
    None => "http://localhost:5001",
};

/// Base URL of the search service.
pub const SEARCH_SERVICE_URL: &str = match option_env!("CAMPUSHUB_SEARCH_URL") {
    Some(url) => url,
    None => "http://localhost:5003",
};

#[cfg(feature = "hydrate")]
pub(crate) fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Decode a success body, or turn a non-2xx response into an `ApiError`.
#[cfg(feature = "hydrate")]
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json::<T>().await.map_err(|_| ApiError::Unknown)
}

/// Read an error response body into an `ApiError`.
#[cfg(feature = "hydrate")]
pub(crate) async fn error_from(resp: gloo_net::http::Response) -> ApiError {
    match resp.text().await {
        Ok(body) => ApiError::from_error_body(&body),
        Err(_) => ApiError::Unknown,
    }
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}
