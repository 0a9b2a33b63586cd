use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetAllItemsUseCaseImpl {
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        // Query validation comes first: a bad parameter is a 400 even for a missing wishlist.
        let filter = ItemFilter::from_query(params.query).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected item query parameter: {}", e.key()))
        })?;

        self.logger.info(&format!(
            "Listing items of wishlist {} with {:?}",
            params.wishlist_id, filter
        ));

        self.wishlist_repository
            .get_by_id(params.wishlist_id)
            .await
            .map_err(ItemError::from_wishlist_lookup)?;

        let items = self.repository.find(params.wishlist_id, &filter).await?;

        self.logger.info(&format!(
            "Retrieved {} items of wishlist {}",
            items.len(),
            params.wishlist_id
        ));
        Ok(items)
    }
}
