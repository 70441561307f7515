use redis::Client;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::{info, warn};

use super::{RedisConfig, check_health};
use crate::common::{DatabaseError, DatabaseResult};

/// Connect to Redis and verify the link with `PING`
pub async fn connect(url: &str) -> DatabaseResult<ConnectionManager> {
    let client = Client::open(url)?;
    let mut manager = ConnectionManager::new(client).await?;
    check_health(&mut manager).await?;
    Ok(manager)
}

/// Connect to the keystore if it is reachable within the configured timeout.
///
/// Failures are logged at `warn` and yield `None`; the caller carries on
/// without a keystore.
pub async fn connect_optional(config: &RedisConfig) -> Option<ConnectionManager> {
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    let outcome = match tokio::time::timeout(timeout, connect(config.url())).await {
        Ok(result) => result,
        Err(_) => Err(DatabaseError::ConnectionFailed(format!(
            "no response within {}s",
            config.connect_timeout_secs
        ))),
    };

    match outcome {
        Ok(manager) => {
            info!(url = config.url(), "Connected to Redis");
            Some(manager)
        }
        Err(e) => {
            warn!(url = config.url(), error = %e, "Failed to connect to Redis, continuing without it");
            None
        }
    }
}
