//! Retail account linking route handlers.
//!
//! Drives the two-step linking flow: locate a retail store record by exact
//! (phone, zip, account number) match, then create online credentials for
//! it. The session holds the current state under one key; a rejected
//! transition leaves the stored state untouched, so a located account
//! survives a bad credential submission.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use uniform_store_core::{
    LinkError, LinkEvent, LinkState, RetailCustomer, RetailOrder, normalize_phone,
};

use crate::db::retail::RetailRepository;
use crate::error::Result;
use crate::models::session_keys;
use crate::routes::auth::{UserView, establish_session};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Lookup request body.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub phone: String,
    pub zip_code: String,
    pub account_number: String,
}

/// Credential creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Order display data for a located retail customer.
#[derive(Debug, Serialize)]
pub struct RetailOrderView {
    pub id: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: String,
    pub created_on: chrono::NaiveDate,
    pub source: String,
}

impl From<&RetailOrder> for RetailOrderView {
    fn from(order: &RetailOrder) -> Self {
        Self {
            id: order.id.clone(),
            subtotal: order.subtotal,
            tax: order.tax,
            total: order.total,
            status: order.status.as_str().to_owned(),
            created_on: order.created_on,
            source: order.source.as_str().to_owned(),
        }
    }
}

/// A located retail customer, shown before credential creation.
#[derive(Debug, Serialize)]
pub struct RetailCustomerView {
    pub account_number: String,
    pub first_name: String,
    pub last_name: String,
    pub orders: Vec<RetailOrderView>,
}

impl From<&RetailCustomer> for RetailCustomerView {
    fn from(customer: &RetailCustomer) -> Self {
        Self {
            account_number: customer.account_number.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            orders: customer.orders.iter().map(RetailOrderView::from).collect(),
        }
    }
}

/// Read the linking state from the session, defaulting to unlinked.
async fn link_state(session: &Session) -> LinkState {
    session
        .get::<LinkState>(session_keys::RETAIL_LINK)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// POST /retail-link/lookup - locate a retail record by exact triple match.
#[instrument(skip(state, session, request))]
pub async fn lookup(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LookupRequest>,
) -> Result<Json<RetailCustomerView>> {
    if request.phone.trim().is_empty()
        || request.zip_code.trim().is_empty()
        || request.account_number.trim().is_empty()
    {
        return Err(LinkError::MissingFields.into());
    }

    // Phone is normalized to digits; zip and account number are exact.
    let phone = normalize_phone(&request.phone);
    let customer = RetailRepository::new(state.pool())
        .find_by_lookup(&phone, request.zip_code.trim(), request.account_number.trim())
        .await?;

    let current = link_state(&session).await;
    let next = current.apply(LinkEvent::Lookup { customer })?;

    // Only a successful transition is persisted.
    session.insert(session_keys::RETAIL_LINK, &next).await?;

    let LinkState::Found(ref customer) = next else {
        // Lookup either fails or lands in Found.
        unreachable!("lookup transition always lands in Found");
    };

    tracing::info!(account = %customer.account_number, "retail account located");
    Ok(Json(RetailCustomerView::from(customer)))
}

/// POST /retail-link/create-account - create credentials for a located record.
///
/// The session state is only advanced after the account row exists, so a
/// database failure leaves the flow at the located step.
#[instrument(skip(state, session, request))]
pub async fn create_account(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<UserView>)> {
    let current = link_state(&session).await;

    let next = current.apply(LinkEvent::CreateCredentials {
        email: request.email,
        password: request.password.clone(),
        confirm_password: request.confirm_password,
    })?;

    let LinkState::Linked(ref identity) = next else {
        unreachable!("credential transition always lands in Linked");
    };

    let user = AuthService::new(state.pool())
        .register_linked(identity, &request.password)
        .await?;

    establish_session(&session, &user).await?;
    session.remove::<LinkState>(session_keys::RETAIL_LINK).await?;

    tracing::info!(
        user_id = %user.id,
        account = %identity.account_number,
        "retail account linked"
    );

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}
