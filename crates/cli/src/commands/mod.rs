//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// The storefront database URL from the environment.
///
/// Prefers `STOREFRONT_DATABASE_URL`, falling back to `DATABASE_URL`.
///
/// # Errors
///
/// Returns an error if neither variable is set.
pub fn database_url() -> Result<SecretString, MissingEnvVar> {
    std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MissingEnvVar("STOREFRONT_DATABASE_URL"))
}

/// A required environment variable is not set.
#[derive(Debug, thiserror::Error)]
#[error("missing environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);
