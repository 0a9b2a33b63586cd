use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;

/// Item payloads accept the price under `price` and, for older clients,
/// under `prices`. When both are sent `price` wins. Responses always use `price`.
#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Catalogue id of the product (strictly positive)
    pub product_id: i64,
    /// Product name
    pub product_name: String,
    /// Non-negative price, rounded to 2 decimals
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Deprecated alias of `price`
    #[oai(skip_serializing_if_is_none)]
    pub prices: Option<f64>,
}

impl CreateItemRequest {
    pub fn resolved_price(&self) -> Option<f64> {
        self.price.or(self.prices)
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub product_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Deprecated alias of `price`
    #[oai(skip_serializing_if_is_none)]
    pub prices: Option<f64>,
}

impl UpdateItemRequest {
    pub fn resolved_price(&self) -> Option<f64> {
        self.price.or(self.prices)
    }
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    pub id: i64,
    pub wishlist_id: i64,
    pub customer_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    /// When the product was added to the wishlist
    pub wish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            wishlist_id: item.wishlist_id,
            customer_id: item.customer_id.to_string(),
            product_id: item.product_id,
            product_name: item.product_name,
            price: item.price.to_f64(),
            wish_date: item.wish_date,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
