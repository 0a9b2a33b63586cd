use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ItemError::ProductIdNotPositive
            | ItemError::ProductNameEmpty
            | ItemError::ProductNameTooLong
            | ItemError::PriceMissing
            | ItemError::PriceInvalid
            | ItemError::PriceNegative
            | ItemError::PriceTooLarge => (StatusCode::BAD_REQUEST, "ValidationError"),
            ItemError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, "InvalidQueryParameter"),
            ItemError::WishlistNotFound | ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ItemError::AlreadyExists => (StatusCode::CONFLICT, "Conflict"),
            ItemError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        let message = match &self {
            ItemError::InvalidQuery(err) => format!("{err}: {}", err.key()),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
