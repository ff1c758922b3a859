//! Database migration command.
//!
//! Runs the storefront schema migrations from
//! `crates/storefront/migrations/`, then lets the session store create its
//! own table. Migrations are never run automatically by the server.

use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;

use uniform_store_storefront::db;

use super::{MissingEnvVar, database_url};

/// Errors from running migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all storefront database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the connection
/// fails, or a migration cannot be applied.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running storefront migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Creating session table...");
    let store = PostgresStore::new(pool);
    store.migrate().await?;

    info!("Migrations complete!");
    Ok(())
}
