use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item::filter::ItemFilter;
use business::domain::item::model::{Item, ItemDraft};
use business::domain::item::repository::ItemRepository;

use super::entity::{ITEM_COLUMNS, ItemEntity};
use crate::error::{contains_pattern, into_repository_error};

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `SELECT` for the items of one wishlist narrowed by `filter`, ascending id.
fn find_query(wishlist_id: i64, filter: &ItemFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE wishlist_id = "
    ));
    query.push_bind(wishlist_id);

    if let Some(product_id) = filter.product_id {
        query.push(" AND product_id = ").push_bind(product_id);
    }
    if let Some(needle) = &filter.product_name_contains {
        query
            .push(" AND product_name ILIKE ")
            .push_bind(contains_pattern(needle));
    }

    query.push(" ORDER BY id");
    query
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn find(
        &self,
        wishlist_id: i64,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, RepositoryError> {
        let entities = find_query(wishlist_id, filter)
            .build_query_as::<ItemEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(into_repository_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, wishlist_id: i64, id: i64) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 AND wishlist_id = $2"
        ))
        .bind(id)
        .bind(wishlist_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_product_id(
        &self,
        wishlist_id: i64,
        product_id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE wishlist_id = $1 AND product_id = $2"
        ))
        .bind(wishlist_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, draft: &ItemDraft) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            r#"INSERT INTO items (wishlist_id, customer_id, product_id, product_name, price, wish_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6, $6)
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(draft.wishlist_id)
        .bind(draft.customer_id.as_str())
        .bind(draft.product_id)
        .bind(&draft.product_name)
        .bind(draft.price.as_decimal())
        .bind(draft.wish_date)
        .fetch_one(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, item: &Item) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            r#"UPDATE items SET
                product_id = $3,
                product_name = $4,
                price = $5,
                updated_at = $6
            WHERE id = $1 AND wishlist_id = $2
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(item.id)
        .bind(item.wishlist_id)
        .bind(item.product_id)
        .bind(&item.product_name)
        .bind(item.price.as_decimal())
        .bind(item.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, wishlist_id: i64, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND wishlist_id = $2")
            .bind(id)
            .bind(wishlist_id)
            .execute(&self.pool)
            .await
            .map_err(into_repository_error)?;

        Ok(result.rows_affected())
    }
}
