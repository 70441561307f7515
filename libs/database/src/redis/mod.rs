//! Auxiliary Redis keystore.
//!
//! The catalog connects and pings at startup; no request path reads or writes it.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_REDIS_URL, RedisConfig};
pub use connector::{connect, connect_optional};
pub use health::check_health;

pub use redis::aio::ConnectionManager;
