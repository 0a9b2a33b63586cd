use chrono::{DateTime, Utc};

use super::errors::WishlistError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::CustomerId;

pub const NAME_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone)]
pub struct Wishlist {
    pub id: i64,
    pub customer_id: CustomerId,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated wishlist that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistDraft {
    pub customer_id: CustomerId,
    pub name: String,
    pub description: Option<String>,
}

/// Fields a caller may change on an existing wishlist.
///
/// `description: Some(None)` clears the description, `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct WishlistPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

fn validate_name(name: &str) -> Result<(), WishlistError> {
    if name.trim().is_empty() {
        return Err(WishlistError::NameEmpty);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(WishlistError::NameTooLong);
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> Result<(), WishlistError> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => {
            Err(WishlistError::DescriptionTooLong)
        }
        _ => Ok(()),
    }
}

impl WishlistDraft {
    pub fn new(
        customer_id: CustomerId,
        name: String,
        description: Option<String>,
    ) -> Result<Self, WishlistError> {
        if customer_id.is_blank() {
            return Err(WishlistError::CustomerIdEmpty);
        }
        if customer_id.is_too_long() {
            return Err(WishlistError::CustomerIdTooLong);
        }
        validate_name(&name)?;
        validate_description(description.as_deref())?;

        Ok(Self {
            customer_id,
            name,
            description,
        })
    }
}

impl Wishlist {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        customer_id: CustomerId,
        name: String,
        description: Option<String>,
        items: Vec<Item>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            name,
            description,
            items,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, customer_id: &CustomerId) -> bool {
        &self.customer_id == customer_id
    }

    /// Merges the provided fields. Leaves `self` untouched when validation fails.
    pub fn apply(&mut self, patch: WishlistPatch) -> Result<(), WishlistError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(description) = &patch.description {
            validate_description(description.as_deref())?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
