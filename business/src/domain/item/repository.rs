use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::ItemFilter;
use super::model::{Item, ItemDraft};

/// Every lookup is scoped to a wishlist: an item stored under another
/// wishlist is reported as `NotFound`.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find(&self, wishlist_id: i64, filter: &ItemFilter)
    -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, wishlist_id: i64, id: i64) -> Result<Item, RepositoryError>;
    async fn find_by_product_id(
        &self,
        wishlist_id: i64,
        product_id: i64,
    ) -> Result<Option<Item>, RepositoryError>;
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, RepositoryError>;
    async fn update(&self, item: &Item) -> Result<Item, RepositoryError>;
    async fn delete(&self, wishlist_id: i64, id: i64) -> Result<u64, RepositoryError>;
}
