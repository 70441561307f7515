#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

/// Keystore URL used when `REDIS_URL` is not set (database 1)
pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379/1";

/// Keystore connection settings
#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub url: String,
    /// Upper bound for the startup connect + PING
    pub connect_timeout_secs: u64,
}

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
            connect_timeout_secs: 3,
        }
    }
}

/// Environment variables:
/// - `REDIS_URL` (default: [`DEFAULT_REDIS_URL`])
/// - `REDIS_CONNECT_TIMEOUT_SECS` (default: 3)
#[cfg(feature = "config")]
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("REDIS_URL", DEFAULT_REDIS_URL),
            connect_timeout_secs: env_parse_or_default("REDIS_CONNECT_TIMEOUT_SECS", 3)?,
        })
    }
}
