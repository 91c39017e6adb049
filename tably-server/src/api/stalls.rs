//! Stall API handlers (admin management; public reads are nested under
//! the restaurant detail)

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, State},
    routing::{post, put},
};
use shared::error::AppError;
use shared::models::stall::{Stall, StallCreate, StallUpdate};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let manage_routes = Router::new()
        .route("/", post(create_stall))
        .route("/{id}", put(update_stall).delete(delete_stall))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/stalls", manage_routes)
}

/// POST /api/stalls (admin)
pub async fn create_stall(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(data): Json<StallCreate>,
) -> ApiResult<Stall> {
    identity.require_admin()?;
    validate_name(&data.name)?;

    db::restaurants::get_active(&state.pool, data.restaurant_id).await?;
    let stall = db::stalls::create(&state.pool, &data).await?;
    Ok(Json(stall))
}

/// PUT /api/stalls/{id} (admin)
pub async fn update_stall(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<StallUpdate>,
) -> ApiResult<Stall> {
    identity.require_admin()?;
    if let Some(ref name) = data.name {
        validate_name(name)?;
    }

    let stall = db::stalls::update(&state.pool, id, &data).await?;
    Ok(Json(stall))
}

/// DELETE /api/stalls/{id} (admin) — cascades to the stall's menu items
pub async fn delete_stall(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    identity.require_admin()?;

    db::stalls::delete(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Stall deleted" })))
}

// Same check on create and update paths
fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    Ok(())
}
