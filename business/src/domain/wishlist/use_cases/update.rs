use async_trait::async_trait;

use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistPatch};

pub struct UpdateWishlistParams {
    pub id: i64,
    pub patch: WishlistPatch,
    /// Customer making the request. Anyone but the owner is refused, including `None`.
    pub requester: Option<CustomerId>,
}

#[async_trait]
pub trait UpdateWishlistUseCase: Send + Sync {
    async fn execute(&self, params: UpdateWishlistParams) -> Result<Wishlist, WishlistError>;
}
