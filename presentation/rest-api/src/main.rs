use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config, app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Pricing REST API entry point
///
/// Loads configuration, connects to Postgres, wires the resolve-price use case
/// and serves `GET /api/get_price/`.
///
/// Layout:
/// - config/: server, CORS and database settings from the environment
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (before reading RUST_LOG)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    tracing_subscriber::fmt()
        .with_env_filter(app_config::log_filter())
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
