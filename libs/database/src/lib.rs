//! Store connectors for the catalog service.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL record store via SeaORM
//! - `redis` (default) - auxiliary Redis keystore
//! - `config` - `core_config::FromEnv` implementations for the store configs
//!
//! ```ignore
//! use database::{postgres, redis};
//!
//! let db = postgres::connect_from_config_with_retry(pg_config, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "products_api").await?;
//!
//! // Keystore is optional: a failed connect is reported, not fatal.
//! let keystore = redis::connect_optional(&redis_config).await;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "redis")]
pub mod redis;

pub use common::{DatabaseError, DatabaseResult};
