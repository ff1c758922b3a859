//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Catalog
//! GET  /products               - Filtered product listing
//!
//! # Cart
//! POST /cart/add               - Add to cart (401 anonymous, 409 logo choice pending)
//! GET  /cart/count             - Cart count badge (0 for anonymous)
//!
//! # Auth
//! POST /auth/register          - Create an individual account
//! POST /auth/login             - Login with email and password
//! POST /auth/logout            - Logout
//!
//! # Group sessions (contract pricing)
//! POST /group/login            - Activate a group by contract code
//! POST /group/logout           - Drop the active group
//! GET  /group                  - The session's active group
//!
//! # Retail account linking
//! POST /retail-link/lookup         - Locate a retail record by exact triple
//! POST /retail-link/create-account - Create credentials for the located record
//! ```

pub mod auth;
pub mod cart;
pub mod group;
pub mod products;
pub mod retail_link;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create the group session routes router.
pub fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(group::current))
        .route("/login", post(group::login))
        .route("/logout", post(group::logout))
}

/// Create the retail linking routes router.
pub fn retail_link_routes() -> Router<AppState> {
    Router::new()
        .route("/lookup", post(retail_link::lookup))
        .route("/create-account", post(retail_link::create_account))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
        .nest("/group", group_routes())
        .nest("/retail-link", retail_link_routes())
}
