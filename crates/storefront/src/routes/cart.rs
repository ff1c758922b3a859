//! Cart route handlers.
//!
//! Adding to the cart requires a signed-in user; the anonymous case is a 401
//! the client turns into its sign-in flow. When an active group offers logo
//! customization for the product and the request carries no choice, the add
//! is rejected with 409 and the client re-submits with `logo_customization`
//! set.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use uniform_store_core::{CartEntry, CartSelection, PricingContext, ProductId};

use crate::db::cart::CartRepository;
use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth, active_group};
use crate::state::AppState;

/// Add-to-cart request body.
///
/// `color` and `size` default to the product's first variant when omitted.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub logo_customization: Option<bool>,
}

/// Cart count response (the badge value).
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub count: i64,
}

/// POST /cart/add - validate and persist a cart entry.
#[instrument(skip(state, session, auth))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    auth: RequireAuth,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartCountResponse>> {
    let RequireAuth(user) = auth;

    let product = ProductRepository::new(state.pool())
        .get(request.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    let pricing = PricingContext::from_session(active_group(&session).await);
    let selection = CartSelection {
        color: request.color,
        size: request.size,
        quantity: request.quantity,
        logo_customization: request.logo_customization,
    };

    let entry = CartEntry::build(&product, selection, &pricing)?;

    let carts = CartRepository::new(state.pool());
    carts.insert(user.id, &entry).await?;
    let count = carts.count(user.id).await?;

    Ok(Json(CartCountResponse { count }))
}

/// GET /cart/count - current cart size, zero for anonymous sessions.
#[instrument(skip(state, auth))]
pub async fn count(
    State(state): State<AppState>,
    auth: OptionalAuth,
) -> Result<Json<CartCountResponse>> {
    let OptionalAuth(user) = auth;

    let count = match user {
        Some(user) => CartRepository::new(state.pool()).count(user.id).await?,
        None => 0,
    };

    Ok(Json(CartCountResponse { count }))
}
