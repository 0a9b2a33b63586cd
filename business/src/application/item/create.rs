use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemDraft};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::value_objects::Price;
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct CreateItemUseCaseImpl {
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Adding product {} to wishlist {}",
            params.product_id, params.wishlist_id
        ));

        let wishlist = self
            .wishlist_repository
            .get_by_id(params.wishlist_id)
            .await
            .map_err(ItemError::from_wishlist_lookup)?;

        let price = Price::from_f64(params.price.ok_or(ItemError::PriceMissing)?)?;
        let draft = ItemDraft::new(&wishlist, params.product_id, params.product_name, price)?;

        if self
            .repository
            .find_by_product_id(draft.wishlist_id, draft.product_id)
            .await?
            .is_some()
        {
            self.logger.warn(&format!(
                "Product {} is already in wishlist {}",
                draft.product_id, draft.wishlist_id
            ));
            return Err(ItemError::AlreadyExists);
        }

        let item = self
            .repository
            .insert(&draft)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::WishlistNotFound,
                other => ItemError::from_write(other),
            })?;

        self.logger.info(&format!(
            "Item {} added to wishlist {}",
            item.id, item.wishlist_id
        ));
        Ok(item)
    }
}
