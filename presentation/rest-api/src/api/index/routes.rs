use std::collections::BTreeMap;

use poem_openapi::{Object, OpenApi, payload::Json};
use url::Url;

use crate::api::tags::ApiTags;

pub const SERVICE_NAME: &str = "Wishlist Service";
const SERVICE_DESCRIPTION: &str = "RESTful service for managing wishlists";

const ROUTES: [(&str, &str); 12] = [
    ("list_all_wishlists", "/wishlists"),
    ("create_wishlist", "/wishlists"),
    ("get_wishlist", "/wishlists/{wishlist_id}"),
    ("update_wishlist", "/wishlists/{wishlist_id}"),
    ("delete_wishlist", "/wishlists/{wishlist_id}"),
    ("clear_wishlist", "/wishlists/{wishlist_id}/clear"),
    ("share_wishlist", "/wishlists/{wishlist_id}/share"),
    ("list_wishlist_items", "/wishlists/{wishlist_id}/items"),
    ("create_wishlist_item", "/wishlists/{wishlist_id}/items"),
    ("get_wishlist_item", "/wishlists/{wishlist_id}/items/{item_id}"),
    ("update_wishlist_item", "/wishlists/{wishlist_id}/items/{item_id}"),
    ("delete_wishlist_item", "/wishlists/{wishlist_id}/items/{item_id}"),
];

#[derive(Debug, Clone, Object)]
pub struct ServiceInfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Absolute URL templates of every endpoint, keyed by operation
    pub paths: BTreeMap<String, String>,
}

impl ServiceInfoResponse {
    fn new(base_url: &Url) -> Self {
        let base = base_url.as_str().trim_end_matches('/');
        let paths = ROUTES
            .iter()
            .map(|(operation, path)| (operation.to_string(), format!("{base}{path}")))
            .collect();

        Self {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            paths,
        }
    }
}

pub struct IndexApi {
    base_url: Url,
}

impl IndexApi {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[OpenApi]
impl IndexApi {
    /// Service information
    ///
    /// Name, version and the URL of every endpoint.
    #[oai(path = "/", method = "get", tag = "ApiTags::Index")]
    async fn index(&self) -> Json<ServiceInfoResponse> {
        Json(ServiceInfoResponse::new(&self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_every_endpoint_under_base_url() {
        let base = Url::parse("http://localhost:8080").unwrap();

        let info = ServiceInfoResponse::new(&base);

        assert_eq!(info.name, SERVICE_NAME);
        assert_eq!(info.paths.len(), ROUTES.len());
        assert_eq!(
            info.paths["get_wishlist_item"],
            "http://localhost:8080/wishlists/{wishlist_id}/items/{item_id}"
        );
        assert_eq!(
            info.paths["share_wishlist"],
            "http://localhost:8080/wishlists/{wishlist_id}/share"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let base = Url::parse("https://shop.example.com/api/").unwrap();

        let info = ServiceInfoResponse::new(&base);

        assert_eq!(
            info.paths["list_all_wishlists"],
            "https://shop.example.com/api/wishlists"
        );
    }
}
