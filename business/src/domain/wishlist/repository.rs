use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::WishlistFilter;
use super::model::{Wishlist, WishlistDraft};

/// Wishlists are always returned with their items loaded, ordered by ascending id.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn find(&self, filter: &WishlistFilter) -> Result<Vec<Wishlist>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError>;
    async fn insert(&self, draft: &WishlistDraft) -> Result<Wishlist, RepositoryError>;
    async fn update(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
    /// Deletes the wishlist together with its items. Returns the number of wishlists removed.
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;
    /// Deletes every item of the wishlist. Fails with `NotFound` if the wishlist is absent.
    async fn clear_items(&self, id: i64) -> Result<u64, RepositoryError>;
}
