use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::filter::WishlistFilter;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_all::{
    GetAllWishlistsParams, GetAllWishlistsUseCase,
};

pub struct GetAllWishlistsUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWishlistsUseCase for GetAllWishlistsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllWishlistsParams,
    ) -> Result<Vec<Wishlist>, WishlistError> {
        let filter = WishlistFilter::from_query(params.query).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected wishlist query parameter: {}", e.key()))
        })?;

        self.logger
            .info(&format!("Listing wishlists with {:?}", filter));
        let wishlists = self.repository.find(&filter).await?;
        self.logger
            .info(&format!("Retrieved {} wishlists", wishlists.len()));
        Ok(wishlists)
    }
}
