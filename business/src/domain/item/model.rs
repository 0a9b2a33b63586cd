use chrono::{DateTime, Utc};

use super::errors::ItemError;
use super::value_objects::Price;
use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::model::Wishlist;

pub const PRODUCT_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone)]
pub struct Item {
    pub id: i64,
    pub wishlist_id: i64,
    pub customer_id: CustomerId,
    pub product_id: i64,
    pub product_name: String,
    pub price: Price,
    pub wish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated item bound to its wishlist, not stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub wishlist_id: i64,
    pub customer_id: CustomerId,
    pub product_id: i64,
    pub product_name: String,
    pub price: Price,
    pub wish_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub price: Option<Price>,
}

fn validate_product_id(product_id: i64) -> Result<(), ItemError> {
    if product_id <= 0 {
        return Err(ItemError::ProductIdNotPositive);
    }
    Ok(())
}

fn validate_product_name(product_name: &str) -> Result<(), ItemError> {
    if product_name.trim().is_empty() {
        return Err(ItemError::ProductNameEmpty);
    }
    if product_name.chars().count() > PRODUCT_NAME_MAX_LEN {
        return Err(ItemError::ProductNameTooLong);
    }
    Ok(())
}

impl ItemDraft {
    /// The item inherits the wishlist's owner.
    pub fn new(
        wishlist: &Wishlist,
        product_id: i64,
        product_name: String,
        price: Price,
    ) -> Result<Self, ItemError> {
        validate_product_id(product_id)?;
        validate_product_name(&product_name)?;

        Ok(Self {
            wishlist_id: wishlist.id,
            customer_id: wishlist.customer_id.clone(),
            product_id,
            product_name,
            price,
            wish_date: Utc::now(),
        })
    }
}

impl Item {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        wishlist_id: i64,
        customer_id: CustomerId,
        product_id: i64,
        product_name: String,
        price: Price,
        wish_date: DateTime<Utc>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            wishlist_id,
            customer_id,
            product_id,
            product_name,
            price,
            wish_date,
            created_at,
            updated_at,
        }
    }

    /// Merges the provided fields. Leaves `self` untouched when validation fails.
    pub fn apply(&mut self, patch: ItemPatch) -> Result<(), ItemError> {
        if let Some(product_id) = patch.product_id {
            validate_product_id(product_id)?;
        }
        if let Some(product_name) = &patch.product_name {
            validate_product_name(product_name)?;
        }

        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(product_name) = patch.product_name {
            self.product_name = product_name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
