use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};

pub struct ClearWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self, params: ClearWishlistParams) -> Result<u64, WishlistError> {
        self.logger
            .info(&format!("Clearing all items in wishlist [{}]", params.id));

        let count = self
            .repository
            .clear_items(params.id)
            .await
            .map_err(WishlistError::from_lookup)?;

        self.logger.info(&format!(
            "Cleared {} item(s) from wishlist [{}]",
            count, params.id
        ));
        Ok(count)
    }
}
