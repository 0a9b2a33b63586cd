use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemPatch};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::item::value_objects::Price;
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct UpdateItemUseCaseImpl {
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Updating item {} in wishlist {}",
            params.id, params.wishlist_id
        ));

        self.wishlist_repository
            .get_by_id(params.wishlist_id)
            .await
            .map_err(ItemError::from_wishlist_lookup)?;

        let mut item = self
            .repository
            .get_by_id(params.wishlist_id, params.id)
            .await
            .map_err(ItemError::from_lookup)?;

        let price = params.price.map(Price::from_f64).transpose()?;

        if let Some(product_id) = params.product_id
            && product_id != item.product_id
            && self
                .repository
                .find_by_product_id(item.wishlist_id, product_id)
                .await?
                .is_some()
        {
            return Err(ItemError::AlreadyExists);
        }

        item.apply(ItemPatch {
            product_id: params.product_id,
            product_name: params.product_name,
            price,
        })?;

        let updated = self
            .repository
            .update(&item)
            .await
            .map_err(ItemError::from_write)?;

        self.logger
            .info(&format!("Item with id [{}] updated", updated.id));
        Ok(updated)
    }
}
