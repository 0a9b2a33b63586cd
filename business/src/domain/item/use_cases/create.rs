use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct CreateItemParams {
    pub wishlist_id: i64,
    pub product_id: i64,
    pub product_name: String,
    /// `None` when the payload carried no price at all.
    pub price: Option<f64>,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
