//! Mocks and fixtures shared by the use-case tests.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::{Item, ItemDraft};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::value_objects::Price;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::filter::WishlistFilter;
use crate::domain::wishlist::model::{Wishlist, WishlistDraft};
use crate::domain::wishlist::repository::WishlistRepository;

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn find(&self, filter: &WishlistFilter) -> Result<Vec<Wishlist>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError>;
        async fn insert(&self, draft: &WishlistDraft) -> Result<Wishlist, RepositoryError>;
        async fn update(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;
        async fn clear_items(&self, id: i64) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
        async fn find(&self, wishlist_id: i64, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
        async fn get_by_id(&self, wishlist_id: i64, id: i64) -> Result<Item, RepositoryError>;
        async fn find_by_product_id(&self, wishlist_id: i64, product_id: i64) -> Result<Option<Item>, RepositoryError>;
        async fn insert(&self, draft: &ItemDraft) -> Result<Item, RepositoryError>;
        async fn update(&self, item: &Item) -> Result<Item, RepositoryError>;
        async fn delete(&self, wishlist_id: i64, id: i64) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_wishlist(id: i64, customer_id: &str, name: &str) -> Wishlist {
    let now = Utc::now();
    Wishlist::from_repository(
        id,
        CustomerId::new(customer_id),
        name.to_string(),
        None,
        vec![],
        now,
        now,
    )
}

pub fn stored_item(id: i64, wishlist_id: i64, product_id: i64, product_name: &str) -> Item {
    let now = Utc::now();
    Item::from_repository(
        id,
        wishlist_id,
        CustomerId::new("CUST001"),
        product_id,
        product_name.to_string(),
        Price::from_f64(9.99).unwrap(),
        now,
        now,
        now,
    )
}

/// Echoes a draft back as a stored item, like the database would.
pub fn item_from_draft(id: i64, draft: &ItemDraft) -> Item {
    Item::from_repository(
        id,
        draft.wishlist_id,
        draft.customer_id.clone(),
        draft.product_id,
        draft.product_name.clone(),
        draft.price.clone(),
        draft.wish_date,
        draft.wish_date,
        draft.wish_date,
    )
}
