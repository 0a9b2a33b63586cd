use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!(
            "Deleting item [{}] from wishlist [{}]",
            params.id, params.wishlist_id
        ));

        let deleted = self
            .repository
            .delete(params.wishlist_id, params.id)
            .await?;

        if deleted == 0 {
            self.logger.info(&format!(
                "Item [{}] not present in wishlist [{}], nothing to delete",
                params.id, params.wishlist_id
            ));
        } else {
            self.logger.info(&format!(
                "Item [{}] deleted from wishlist [{}]",
                params.id, params.wishlist_id
            ));
        }
        Ok(())
    }
}
