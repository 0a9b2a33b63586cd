use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::wishlist::filter::WishlistFilter;
use business::domain::wishlist::model::{Wishlist, WishlistDraft};
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::{WISHLIST_COLUMNS, WishlistEntity};
use crate::error::{contains_pattern, into_repository_error};
use crate::item::entity::{ITEM_COLUMNS, ItemEntity};

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the items of every given wishlist with one query, grouped by wishlist.
    async fn items_by_wishlist(
        &self,
        wishlist_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Item>>, RepositoryError> {
        if wishlist_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE wishlist_id = ANY($1) ORDER BY id"
        ))
        .bind(wishlist_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(into_repository_error)?;

        let mut grouped: HashMap<i64, Vec<Item>> = HashMap::new();
        for entity in entities {
            grouped
                .entry(entity.wishlist_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(grouped)
    }

    async fn with_items(&self, entity: WishlistEntity) -> Result<Wishlist, RepositoryError> {
        let mut items = self.items_by_wishlist(&[entity.id]).await?;
        let own_items = items.remove(&entity.id).unwrap_or_default();
        Ok(entity.into_domain(own_items))
    }
}

/// `SELECT` for wishlists narrowed by `filter`, ascending id.
fn find_query(filter: &WishlistFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {WISHLIST_COLUMNS} FROM wishlists WHERE TRUE"));

    if let Some(customer_id) = &filter.customer_id {
        query
            .push(" AND customer_id = ")
            .push_bind(customer_id.as_str().to_owned());
    }
    if let Some(needle) = &filter.name_contains {
        query
            .push(" AND name ILIKE ")
            .push_bind(contains_pattern(needle));
    }

    query.push(" ORDER BY id");
    query
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn find(&self, filter: &WishlistFilter) -> Result<Vec<Wishlist>, RepositoryError> {
        let entities = find_query(filter)
            .build_query_as::<WishlistEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(into_repository_error)?;

        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut items = self.items_by_wishlist(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let own_items = items.remove(&e.id).unwrap_or_default();
                e.into_domain(own_items)
            })
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(&format!(
            "SELECT {WISHLIST_COLUMNS} FROM wishlists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.with_items(entity).await
    }

    async fn insert(&self, draft: &WishlistDraft) -> Result<Wishlist, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(&format!(
            r#"INSERT INTO wishlists (customer_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING {WISHLIST_COLUMNS}"#
        ))
        .bind(draft.customer_id.as_str())
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.into_domain(Vec::new()))
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(&format!(
            r#"UPDATE wishlists SET
                name = $2,
                description = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING {WISHLIST_COLUMNS}"#
        ))
        .bind(wishlist.id)
        .bind(&wishlist.name)
        .bind(&wishlist.description)
        .bind(wishlist.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.with_items(entity).await
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        // Items go with it through ON DELETE CASCADE, in the same statement.
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(into_repository_error)?;

        Ok(result.rows_affected())
    }

    async fn clear_items(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(into_repository_error)?;

        sqlx::query("SELECT id FROM wishlists WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(into_repository_error)?
            .ok_or(RepositoryError::NotFound)?;

        let result = sqlx::query("DELETE FROM items WHERE wishlist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(into_repository_error)?;

        tx.commit().await.map_err(into_repository_error)?;
        Ok(result.rows_affected())
    }
}
