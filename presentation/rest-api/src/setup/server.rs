use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::error::with_json_errors;
use crate::api::index::routes::SERVICE_NAME;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = config.public_base_url.as_str().trim_end_matches('/').to_string();

        let api_service = OpenApiService::new(
            (
                container.index_api,
                container.health_api,
                container.wishlist_api,
                container.item_api,
            ),
            SERVICE_NAME,
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url.clone());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let routes = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec);
        let app = with_json_errors(routes)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(address = %addr, "server listening");
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
