use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct CreateWishlistParams {
    pub customer_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateWishlistUseCase: Send + Sync {
    async fn execute(&self, params: CreateWishlistParams) -> Result<Wishlist, WishlistError>;
}
