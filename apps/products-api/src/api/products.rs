//! Product catalog routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};
use tracing::{error, info};

use crate::state::AppState;

fn service(state: &AppState) -> ProductService<PgProductRepository> {
    ProductService::new(PgProductRepository::new(state.db.clone()))
}

/// Create products router
pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

/// Insert the sample catalog into an empty store.
///
/// Failures are logged and startup continues.
pub async fn seed(state: &AppState) {
    match service(state).seed_sample_products().await {
        Ok(0) => info!("Product catalog already populated, seed skipped"),
        Ok(count) => info!(count, "Seeded sample products"),
        Err(e) => error!(error = %e, "Failed to seed sample products"),
    }
}
