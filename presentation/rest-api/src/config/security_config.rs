use std::env;

/// Shared secret guarding the mutating wishlist endpoints
///
/// Environment variables:
/// - API_KEY: expected value of the `X-Api-Key` header. When unset or blank
///   the guarded endpoints are open, which is meant for local development.
#[derive(Debug, Clone, Default)]
pub struct SecurityConfig {
    pub api_key: Option<String>,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("API_KEY").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        Self {
            api_key: value.filter(|key| !key.trim().is_empty()),
        }
    }
}
