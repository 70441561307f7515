//! Shared test utilities
//!
//! Containers for integration tests, removed automatically on drop:
//! - `TestDatabase`: PostgreSQL with the workspace migrations applied (feature: "postgres")
//! - `TestRedis`: Redis (feature: "redis")
//!
//! Both need a running Docker daemon, so tests using them are marked
//! `#[ignore]` and run with `cargo test -- --ignored`.
//!
//! # Features
//!
//! - `postgres` (default): Enables PostgreSQL test infrastructure
//! - `redis`: Enables Redis test infrastructure
//! - `all`: Enables all of the above
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::TestDatabase;
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let connection = db.connection();
//! }
//! ```

// Conditionally compile database modules based on features
#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "redis")]
mod redis;

// Re-export based on enabled features
#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

#[cfg(feature = "redis")]
pub use redis::TestRedis;
