//! Dining table API handlers

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, State},
    routing::{get, post, put},
};
use shared::error::AppError;
use shared::models::dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/", get(list_tables))
        .route("/{id}", get(get_table))
        .route("/{id}/lock", post(lock_table))
        .route("/{id}/unlock", post(unlock_table));

    let manage_routes = Router::new()
        .route("/", post(create_table))
        .route("/{id}", put(update_table).delete(delete_table))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/tables", read_routes.merge(manage_routes))
}

/// GET /api/tables
pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Vec<DiningTable>> {
    let tables = db::tables::list(&state.pool).await?;
    Ok(Json(tables))
}

/// GET /api/tables/{id}
pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<DiningTable> {
    let table = db::tables::get(&state.pool, id).await?;
    Ok(Json(table))
}

/// POST /api/tables/{id}/lock — advisory mutual-exclusion flag
pub async fn lock_table(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    db::tables::lock(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Table locked successfully" })))
}

/// POST /api/tables/{id}/unlock
pub async fn unlock_table(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    db::tables::unlock(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Table unlocked successfully" })))
}

// ── Admin CRUD ──

/// POST /api/tables (admin)
pub async fn create_table(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(data): Json<DiningTableCreate>,
) -> ApiResult<DiningTable> {
    identity.require_admin()?;
    validate_seats(data.seats)?;

    db::restaurants::get_active(&state.pool, data.restaurant_id).await?;
    let table = db::tables::create(&state.pool, &data).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{id} (admin)
pub async fn update_table(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<DiningTableUpdate>,
) -> ApiResult<DiningTable> {
    identity.require_admin()?;
    validate_seats(data.seats)?;

    let table = db::tables::update(&state.pool, id, &data).await?;
    Ok(Json(table))
}

/// DELETE /api/tables/{id} (admin)
pub async fn delete_table(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    identity.require_admin()?;

    db::tables::delete(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Table deleted" })))
}

// Same check on create and update paths
fn validate_seats(seats: Option<i32>) -> Result<(), AppError> {
    if let Some(seats) = seats
        && seats < 1
    {
        return Err(AppError::validation("Seats must be at least 1"));
    }
    Ok(())
}
