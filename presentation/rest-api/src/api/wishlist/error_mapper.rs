use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            WishlistError::CustomerIdEmpty
            | WishlistError::CustomerIdTooLong
            | WishlistError::NameEmpty
            | WishlistError::NameTooLong
            | WishlistError::DescriptionTooLong => (StatusCode::BAD_REQUEST, "ValidationError"),
            WishlistError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, "InvalidQueryParameter"),
            WishlistError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            WishlistError::NotOwner => (StatusCode::FORBIDDEN, "Forbidden"),
            WishlistError::AlreadyExists => (StatusCode::CONFLICT, "Conflict"),
            WishlistError::ShareLinkInvalid | WishlistError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        let message = match &self {
            WishlistError::InvalidQuery(err) => format!("{err}: {}", err.key()),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
