//! Catalog service.
//!
//! Loads the product list and organizational groups from the database. The
//! product list is cached in-memory via `moka` so repeated filter requests
//! don't re-query the catalog tables on every keystroke.

use std::sync::Arc;

use tracing::debug;

use uniform_store_core::{Group, Product};

use crate::db::RepositoryError;
use crate::db::groups::GroupRepository;
use crate::db::products::ProductRepository;
use crate::state::{AppState, CatalogKey};

/// Load the full product catalog, using the cached copy when fresh.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the catalog query fails.
pub async fn load_products(state: &AppState) -> Result<Arc<Vec<Product>>, RepositoryError> {
    // Check cache
    if let Some(products) = state.catalog_cache().get(&CatalogKey).await {
        debug!(count = products.len(), "catalog cache hit");
        return Ok(products);
    }

    let products = ProductRepository::new(state.pool()).list().await?;
    debug!(count = products.len(), "catalog loaded from database");

    let products = Arc::new(products);
    state
        .catalog_cache()
        .insert(CatalogKey, Arc::clone(&products))
        .await;

    Ok(products)
}

/// Load all active and inactive groups.
///
/// Group code matching happens in memory over the full list, so inactive
/// groups are loaded too and rejected by the matcher.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn load_groups(state: &AppState) -> Result<Vec<Group>, RepositoryError> {
    GroupRepository::new(state.pool()).list().await
}
