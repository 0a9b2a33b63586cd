use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct GetAllWishlistsParams {
    /// Raw query-string pairs, validated by the use case.
    pub query: Vec<(String, String)>,
}

#[async_trait]
pub trait GetAllWishlistsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllWishlistsParams)
    -> Result<Vec<Wishlist>, WishlistError>;
}
