use url::Url;

/// Absolute URL of a resource below the public base URL.
pub fn resource_url(base: &Url, segments: &[&str]) -> String {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.to_string()
}

pub fn wishlist_url(base: &Url, wishlist_id: i64) -> String {
    resource_url(base, &["wishlists", wishlist_id.to_string().as_str()])
}

pub fn item_url(base: &Url, wishlist_id: i64, item_id: i64) -> String {
    resource_url(
        base,
        &[
            "wishlists",
            wishlist_id.to_string().as_str(),
            "items",
            item_id.to_string().as_str(),
        ],
    )
}
