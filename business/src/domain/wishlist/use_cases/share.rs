use async_trait::async_trait;
use url::Url;

use crate::domain::wishlist::errors::WishlistError;

pub struct ShareWishlistParams {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareLink {
    pub wishlist_id: i64,
    pub url: Url,
}

#[async_trait]
pub trait ShareWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ShareWishlistParams) -> Result<ShareLink, WishlistError>;
}
