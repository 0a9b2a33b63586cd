use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct GetAllItemsParams {
    pub wishlist_id: i64,
    /// Raw query-string pairs, validated by the use case.
    pub query: Vec<(String, String)>,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
