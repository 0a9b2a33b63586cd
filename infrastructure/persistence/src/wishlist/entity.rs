use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::CustomerId;
use business::domain::wishlist::model::Wishlist;

pub const WISHLIST_COLUMNS: &str = "id, customer_id, name, description, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub id: i64,
    pub customer_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WishlistEntity {
    pub fn into_domain(self, items: Vec<Item>) -> Wishlist {
        Wishlist::from_repository(
            self.id,
            CustomerId::new(self.customer_id),
            self.name,
            self.description,
            items,
            self.created_at,
            self.updated_at,
        )
    }
}
