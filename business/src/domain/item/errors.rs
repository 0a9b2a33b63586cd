use crate::domain::errors::RepositoryError;
use crate::domain::shared::query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.product_id_not_positive")]
    ProductIdNotPositive,
    #[error("item.product_name_empty")]
    ProductNameEmpty,
    #[error("item.product_name_too_long")]
    ProductNameTooLong,
    #[error("item.price_missing")]
    PriceMissing,
    #[error("item.price_invalid")]
    PriceInvalid,
    #[error("item.price_negative")]
    PriceNegative,
    #[error("item.price_too_large")]
    PriceTooLarge,
    #[error("wishlist.not_found")]
    WishlistNotFound,
    #[error("item.not_found")]
    NotFound,
    #[error("item.already_exists")]
    AlreadyExists,
    #[error("{0}")]
    InvalidQuery(#[from] QueryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ItemError {
    pub fn from_wishlist_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ItemError::WishlistNotFound,
            other => ItemError::Repository(other),
        }
    }

    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        }
    }

    pub fn from_write(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated => ItemError::AlreadyExists,
            RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        }
    }
}
