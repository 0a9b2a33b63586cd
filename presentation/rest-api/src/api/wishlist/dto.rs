use chrono::{DateTime, Utc};
use poem_openapi::{Object, types::MaybeUndefined};

use business::domain::wishlist::model::{Wishlist, WishlistPatch};
use business::domain::wishlist::use_cases::share::ShareLink;

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateWishlistRequest {
    /// Owner of the wishlist (1 to 16 characters)
    pub customer_id: String,
    /// Wishlist name, unique per customer
    pub name: String,
    /// Optional free text (up to 500 characters)
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateWishlistRequest {
    /// New name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New description. `null` removes it, omitting the field keeps it.
    pub description: MaybeUndefined<String>,
}

impl UpdateWishlistRequest {
    pub fn into_patch(self) -> WishlistPatch {
        let description = match self.description {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(description) => Some(Some(description)),
        };

        WishlistPatch {
            name: self.name,
            description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// Wishlist unique identifier
    pub id: i64,
    /// Owner of the wishlist
    pub customer_id: String,
    /// Wishlist name
    pub name: String,
    /// Free text, `null` when unset
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Items ordered by ascending id
    pub items: Vec<ItemResponse>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            id: wishlist.id,
            customer_id: wishlist.customer_id.to_string(),
            name: wishlist.name,
            description: wishlist.description,
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
            items: wishlist.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShareLinkResponse {
    pub wishlist_id: i64,
    /// Public URL of the wishlist
    pub share_url: String,
}

impl From<ShareLink> for ShareLinkResponse {
    fn from(link: ShareLink) -> Self {
        Self {
            wishlist_id: link.wishlist_id,
            share_url: link.url.to_string(),
        }
    }
}
