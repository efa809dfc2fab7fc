//! Wire types shared with the remote services.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A marketplace listing as returned by the listings service.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: String,
    pub condition: String,
    pub date_posted: String,
    pub seller_id: String,
    pub seller_name: String,
    pub category: String,
}

impl Listing {
    /// Best available image for card and detail views.
    pub fn display_image(&self) -> &str {
        if let Some(url) = self.image_url.as_deref() {
            return url;
        }
        self.images
            .first()
            .map_or("/placeholder-image.jpg", String::as_str)
    }
}

/// A user profile as returned by the users service.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(serde::Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct PreRegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub location: &'a str,
}

/// Plain `{"message": ...}` acknowledgement used by several auth endpoints.
#[derive(serde::Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(serde::Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// Wishlist read response: listing ids only; the client resolves each id
/// against the listings service.
#[derive(serde::Deserialize)]
pub struct WishlistResponse {
    #[serde(default)]
    pub wishlist: Vec<String>,
}
