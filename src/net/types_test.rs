use super::*;

fn listing(image_url: Option<&str>, images: &[&str]) -> Listing {
    Listing {
        id: "L1".to_owned(),
        title: "Desk lamp".to_owned(),
        description: "Barely used".to_owned(),
        price: 12.5,
        image_url: image_url.map(str::to_owned),
        images: images.iter().map(|&s| s.to_owned()).collect(),
        location: "St. George".to_owned(),
        condition: "Good".to_owned(),
        date_posted: "2024-11-02".to_owned(),
        seller_id: "u-1".to_owned(),
        seller_name: "sam".to_owned(),
        category: "Furniture".to_owned(),
    }
}

#[test]
fn display_image_prefers_direct_url() {
    let l = listing(Some("/a.jpg"), &["/b.jpg"]);
    assert_eq!(l.display_image(), "/a.jpg");
}

#[test]
fn display_image_falls_back_to_first_image() {
    let l = listing(None, &["/b.jpg", "/c.jpg"]);
    assert_eq!(l.display_image(), "/b.jpg");
}

#[test]
fn display_image_placeholder_when_no_images() {
    let l = listing(None, &[]);
    assert_eq!(l.display_image(), "/placeholder-image.jpg");
}

#[test]
fn listing_decodes_camel_case_fields() {
    let json = r#"{
        "id": "L1",
        "title": "Desk lamp",
        "description": "Barely used",
        "price": 12.5,
        "location": "St. George",
        "condition": "Good",
        "datePosted": "2024-11-02",
        "sellerId": "u-1",
        "sellerName": "sam",
        "category": "Furniture"
    }"#;
    let l: Listing = serde_json::from_str(json).expect("listing");
    assert_eq!(l.seller_id, "u-1");
    assert_eq!(l.date_posted, "2024-11-02");
    assert!(l.images.is_empty());
    assert!(l.image_url.is_none());
}

#[test]
fn wishlist_response_defaults_to_empty() {
    let resp: WishlistResponse = serde_json::from_str("{}").expect("wishlist");
    assert!(resp.wishlist.is_empty());
}
