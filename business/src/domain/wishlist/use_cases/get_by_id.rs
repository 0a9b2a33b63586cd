use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct GetWishlistByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetWishlistByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetWishlistByIdParams) -> Result<Wishlist, WishlistError>;
}
