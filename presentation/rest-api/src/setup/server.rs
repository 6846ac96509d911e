use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, &format!("http://{}", addr));
        tracing::info!(%addr, "pricing api listening, swagger ui at /docs");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Routes, docs and middleware of the service.
    ///
    /// Operations are registered without a trailing slash; `NormalizePath`
    /// trims it so `/api/get_price/` and `/api/get_price` resolve alike.
    pub fn app(container: DependencyContainer, cors: Cors, server_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.pricing_api),
            "Pricing API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(NormalizePath::new(TrailingSlash::Trim))
            .with(cors)
            .with(Tracing)
    }
}
