use crate::domain::errors::RepositoryError;
use crate::domain::shared::query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.customer_id_empty")]
    CustomerIdEmpty,
    #[error("wishlist.customer_id_too_long")]
    CustomerIdTooLong,
    #[error("wishlist.name_empty")]
    NameEmpty,
    #[error("wishlist.name_too_long")]
    NameTooLong,
    #[error("wishlist.description_too_long")]
    DescriptionTooLong,
    #[error("wishlist.not_found")]
    NotFound,
    #[error("wishlist.not_owner")]
    NotOwner,
    #[error("wishlist.already_exists")]
    AlreadyExists,
    #[error("wishlist.share_link_invalid")]
    ShareLinkInvalid,
    #[error("{0}")]
    InvalidQuery(#[from] QueryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl WishlistError {
    /// Maps lookups by id, so a missing row reads as a missing wishlist.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => WishlistError::NotFound,
            other => WishlistError::Repository(other),
        }
    }

    /// Maps writes, so a unique violation reads as a duplicate name.
    pub fn from_write(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated => WishlistError::AlreadyExists,
            RepositoryError::NotFound => WishlistError::NotFound,
            other => WishlistError::Repository(other),
        }
    }
}
