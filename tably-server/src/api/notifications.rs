//! Notification API handlers

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, State},
    routing::{get, post},
};
use shared::models::notification::Notification;

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(list_notifications))
        .route("/{id}/mark_as_read", post(mark_as_read))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/notifications", routes)
}

/// GET /api/notifications — caller's feed, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<Vec<Notification>> {
    let notifications = db::notifications::list_for_user(&state.pool, identity.user_id).await?;
    Ok(Json(notifications))
}

/// POST /api/notifications/{id}/mark_as_read — idempotent
pub async fn mark_as_read(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    db::notifications::mark_read(&state.pool, identity.user_id, id).await?;
    Ok(Json(serde_json::json!({ "status": "Notification marked as read" })))
}
