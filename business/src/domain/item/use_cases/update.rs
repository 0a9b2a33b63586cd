use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct UpdateItemParams {
    pub wishlist_id: i64,
    pub id: i64,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
