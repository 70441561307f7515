//! Application state management

use database::postgres::DatabaseConnection;
use database::redis::ConnectionManager;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
    /// Auxiliary keystore, `None` when it was unreachable at startup
    pub keystore: Option<ConnectionManager>,
}
