use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::delete::{DeleteWishlistParams, DeleteWishlistUseCase};

pub struct DeleteWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteWishlistUseCase for DeleteWishlistUseCaseImpl {
    async fn execute(&self, params: DeleteWishlistParams) -> Result<(), WishlistError> {
        self.logger
            .info(&format!("Deleting wishlist: {}", params.id));

        let deleted = self.repository.delete(params.id).await?;

        if deleted == 0 {
            self.logger.info(&format!(
                "Wishlist {} did not exist, nothing to delete",
                params.id
            ));
        } else {
            self.logger
                .info(&format!("Wishlist with id [{}] deleted", params.id));
        }
        Ok(())
    }
}
