use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::item::value_objects::Price;
use business::domain::shared::value_objects::CustomerId;

pub const ITEM_COLUMNS: &str = "id, wishlist_id, customer_id, product_id, product_name, price, wish_date, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub wishlist_id: i64,
    pub customer_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub price: BigDecimal,
    pub wish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.wishlist_id,
            CustomerId::new(self.customer_id),
            self.product_id,
            self.product_name,
            Price::from_repository(self.price),
            self.wish_date,
            self.created_at,
            self.updated_at,
        )
    }
}
