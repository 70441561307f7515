//! Product service - REST catalog API

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use database::{postgres, redis};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        service = config.app.name,
        version = config.app.version,
        "Starting product service"
    );
    info!(
        "Connecting to PostgreSQL at {}",
        config.postgres.redacted_url()
    );

    let db = postgres::connect_from_config_with_retry(
        config.postgres.clone(),
        Some(RetryConfig::startup()),
    )
    .await?;

    postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let keystore = redis::connect_optional(&config.redis).await;

    let state = AppState {
        config: config.clone(),
        db,
        keystore,
    };

    api::products::seed(&state).await;

    let router = create_router::<openapi::ApiDoc>(api::routes(&state))?;
    let app = router.merge(health_router(config.app.clone()));

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        info!("Shutting down: closing store connections");
        postgres::close(state.db).await;
        if state.keystore.is_some() {
            info!("Keystore connection released");
        }
    })
    .await?;

    info!("Product service shutdown complete");
    Ok(())
}
