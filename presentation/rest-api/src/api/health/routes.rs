use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use sqlx::PgPool;

use persistence::db::ping;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn new(database_up: bool) -> Self {
        Self {
            status: if database_up { "healthy" } else { "degraded" }.to_string(),
            database: if database_up { "up" } else { "down" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Liveness and readiness probe for containers and load balancers.
pub struct HealthApi {
    pool: PgPool,
}

impl HealthApi {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns 200 while the database is reachable and 503 otherwise.
    /// Public, no API key needed.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database_up = ping(&self.pool).await;
        let body = Json(HealthCheckResponse::new(database_up));

        if database_up {
            HealthResponse::Ok(body)
        } else {
            tracing::warn!("health check failed: database unreachable");
            HealthResponse::Unavailable(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_degraded_when_database_is_down() {
        let body = HealthCheckResponse::new(false);

        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "down");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn should_report_healthy_when_database_is_up() {
        let body = HealthCheckResponse::new(true);

        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "up");
    }
}
