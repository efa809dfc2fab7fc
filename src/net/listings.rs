//! REST helpers for the listings and search services.

use super::error::ApiError;
use super::types::Listing;

#[cfg(feature = "hydrate")]
use super::{LISTINGS_SERVICE_URL, SEARCH_SERVICE_URL, decode, net_err};

/// Editable listing fields, shared by the create and edit forms.
#[derive(Clone, Copy, Debug)]
pub struct ListingFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: &'a str,
    pub category: &'a str,
    pub condition: &'a str,
    pub location: &'a str,
}

/// Fetch every listing from `GET /api/listings/all`.
///
/// # Errors
///
/// Returns a network error if the service is unreachable.
pub async fn fetch_all() -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{LISTINGS_SERVICE_URL}/api/listings/all"))
            .send()
            .await
            .map_err(net_err)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        super::unavailable()
    }
}

/// Fetch one listing from `GET /api/listings/{id}`.
///
/// # Errors
///
/// Returns the server's error string for unknown ids.
pub async fn fetch_by_id(id: &str) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{LISTINGS_SERVICE_URL}/api/listings/{id}"))
            .send()
            .await
            .map_err(net_err)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        super::unavailable()
    }
}

/// Fetch a seller's listings from `GET /api/listings/user/{seller_id}`.
///
/// # Errors
///
/// Returns a network error if the service is unreachable.
pub async fn fetch_by_user(seller_id: &str) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::get(&format!("{LISTINGS_SERVICE_URL}/api/listings/user/{seller_id}"))
                .send()
                .await
                .map_err(net_err)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seller_id;
        super::unavailable()
    }
}

/// Query the search service via `GET /search?q=...`.
///
/// # Errors
///
/// Returns a network error if the service is unreachable.
pub async fn search(query: &str) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{SEARCH_SERVICE_URL}/search"))
            .query([("q", query)])
            .send()
            .await
            .map_err(net_err)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        super::unavailable()
    }
}

/// Delete a listing via `DELETE /api/listings/delete/{id}`.
///
/// # Errors
///
/// Returns the server's error string when the delete is rejected.
pub async fn delete(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::delete(&format!("{LISTINGS_SERVICE_URL}/api/listings/delete/{id}"))
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
        let _ = (token, id);
        super::unavailable()
    }
}

/// Create a listing via `POST /api/listings/create-listing` (multipart with
/// images). Browser-only: the multipart body is built from DOM `File`s.
///
/// # Errors
///
/// Returns the server's error string when the create is rejected.
#[cfg(feature = "hydrate")]
pub async fn create(
    token: &str,
    fields: ListingFields<'_>,
    images: Option<&web_sys::FileList>,
) -> Result<Listing, ApiError> {
    let form = multipart(fields, images)?;
    let resp = gloo_net::http::Request::post(&format!(
        "{LISTINGS_SERVICE_URL}/api/listings/create-listing"
    ))
    .header("Authorization", &format!("Bearer {token}"))
    .body(form)
    .map_err(net_err)?
    .send()
    .await
    .map_err(net_err)?;
    decode(resp).await
}

/// Update a listing via `PUT /api/listings/edit/{id}` (multipart).
///
/// # Errors
///
/// Returns the server's error string when the edit is rejected.
#[cfg(feature = "hydrate")]
pub async fn edit(
    token: &str,
    id: &str,
    fields: ListingFields<'_>,
    images: Option<&web_sys::FileList>,
) -> Result<Listing, ApiError> {
    let form = multipart(fields, images)?;
    let resp =
        gloo_net::http::Request::put(&format!("{LISTINGS_SERVICE_URL}/api/listings/edit/{id}"))
            .header("Authorization", &format!("Bearer {token}"))
            .body(form)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
fn multipart(
    fields: ListingFields<'_>,
    images: Option<&web_sys::FileList>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    let _ = form.append_with_str("title", fields.title);
    let _ = form.append_with_str("description", fields.description);
    let _ = form.append_with_str("price", fields.price);
    let _ = form.append_with_str("category", fields.category);
    let _ = form.append_with_str("condition", fields.condition);
    let _ = form.append_with_str("location", fields.location);
    if let Some(files) = images {
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                let _ = form.append_with_blob_and_filename("images", &file, &file.name());
            }
        }
    }
    Ok(form)
}
