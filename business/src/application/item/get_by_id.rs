use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetItemByIdUseCaseImpl {
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Fetching item {} from wishlist {}",
            params.id, params.wishlist_id
        ));

        self.wishlist_repository
            .get_by_id(params.wishlist_id)
            .await
            .map_err(ItemError::from_wishlist_lookup)?;

        let item = self
            .repository
            .get_by_id(params.wishlist_id, params.id)
            .await
            .map_err(ItemError::from_lookup)?;

        Ok(item)
    }
}
