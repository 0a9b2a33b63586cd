use poem_openapi::payload::Json;
use subtle::ConstantTimeEq;

use crate::api::error::ErrorResponse;

/// Guards mutating wishlist endpoints with the `X-Api-Key` header.
///
/// With no key configured every request passes.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyGuard {
    expected: Option<String>,
}

impl ApiKeyGuard {
    pub fn new(expected: Option<String>) -> Self {
        Self { expected }
    }

    pub fn check(&self, provided: Option<&str>) -> Result<(), Json<ErrorResponse>> {
        let Some(expected) = &self.expected else {
            return Ok(());
        };

        match provided {
            Some(key) if bool::from(key.as_bytes().ct_eq(expected.as_bytes())) => Ok(()),
            Some(_) => {
                tracing::warn!("rejected request with an invalid api key");
                Err(unauthorized("auth.invalid_api_key"))
            }
            None => Err(unauthorized("auth.missing_api_key")),
        }
    }
}

fn unauthorized(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Unauthorized", message))
}
