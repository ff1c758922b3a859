//! Group login route handlers.
//!
//! A group session is entered by code, independent of any individual login.
//! A failed code leaves the session exactly as it was; any prior active
//! group and its contract pricing stay in effect.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use uniform_store_core::{Group, find_group};

use crate::error::{AppError, Result};
use crate::middleware::active_group;
use crate::models::session_keys;
use crate::routes::products::GroupView;
use crate::services::catalog;
use crate::state::AppState;

/// Group login request body.
#[derive(Debug, Deserialize)]
pub struct GroupLoginRequest {
    pub code: String,
}

/// POST /group/login - activate a group by contract code.
#[instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<GroupLoginRequest>,
) -> Result<Json<GroupView>> {
    let groups = catalog::load_groups(&state).await?;

    // Inactive groups never match, regardless of code.
    let Some(group) = find_group(&groups, &request.code) else {
        return Err(AppError::NotFound(
            "no active group matches that code".to_owned(),
        ));
    };

    session.insert(session_keys::ACTIVE_GROUP, group).await?;
    tracing::info!(group_code = %group.code, "group session started");

    Ok(Json(GroupView::from(group)))
}

/// POST /group/logout - drop the active group, reverting to retail pricing.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    session
        .remove::<Group>(session_keys::ACTIVE_GROUP)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /group - the session's active group, if any.
#[instrument(skip(session))]
pub async fn current(session: Session) -> Json<Option<GroupView>> {
    let group = active_group(&session).await;
    Json(group.as_ref().map(GroupView::from))
}
