use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;

pub struct ClearWishlistParams {
    pub id: i64,
}

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ClearWishlistParams) -> Result<u64, WishlistError>;
}
