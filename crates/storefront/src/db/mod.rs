//! Database operations for the storefront `PostgreSQL`.
//!
//! # Tables
//!
//! - `products` - The catalog (colors as JSONB, sizes as TEXT[])
//! - `groups` - Organizational contracts (unique code, case-insensitive lookup)
//! - `users` - Online accounts (optionally linked to a retail account)
//! - `cart_items` - Insert-only cart rows keyed by user
//! - `retail_customers` / `retail_orders` - Imported retail store records
//! - `tower_sessions.session` - Session storage (created by the session store)
//!
//! Queries are runtime-checked (`query`/`query_as` with `FromRow`) so the
//! workspace builds without a live database.
//!
//! # Migrations
//!
//! Migrations live in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p uniform-store-cli -- migrate
//! ```

pub mod cart;
pub mod groups;
pub mod products;
pub mod retail;
pub mod users;

pub use cart::CartRepository;
pub use groups::GroupRepository;
pub use products::ProductRepository;
pub use retail::RetailRepository;
pub use users::UserRepository;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
