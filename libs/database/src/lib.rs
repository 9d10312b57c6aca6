//! PostgreSQL connection management for the services
//!
//! - [`postgres`]: env-driven pool configuration, connect with retry,
//!   migration runner and a `SELECT 1` health probe
//! - [`common`]: the shared error type and exponential backoff
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
