//! Restaurant API handlers

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, Query, State},
    routing::{get, post, put},
};
use serde::Deserialize;
use shared::error::AppError;
use shared::models::dining_table::DiningTable;
use shared::models::menu_item::MenuItemView;
use shared::models::restaurant::{Restaurant, RestaurantCreate, RestaurantDetail, RestaurantUpdate};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/", get(list_restaurants))
        .route("/{id}", get(get_restaurant))
        .route("/{id}/tables", get(restaurant_tables))
        .route("/{id}/menu", get(restaurant_menu));

    let manage_routes = Router::new()
        .route("/", post(create_restaurant))
        .route("/{id}", put(update_restaurant).delete(delete_restaurant))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/restaurants", read_routes.merge(manage_routes))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// GET /api/restaurants — active restaurants, searchable
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<Restaurant>> {
    let restaurants = db::restaurants::list(&state.pool, query.search.as_deref()).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id} — detail with nested tables, stalls, and menu
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<RestaurantDetail> {
    let detail = db::restaurants::detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// GET /api/restaurants/{id}/tables — available tables only
pub async fn restaurant_tables(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<DiningTable>> {
    db::restaurants::get_active(&state.pool, id).await?;
    let tables = db::tables::list_available_for_restaurant(&state.pool, id).await?;
    Ok(Json(tables))
}

/// GET /api/restaurants/{id}/menu — available items only
pub async fn restaurant_menu(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<MenuItemView>> {
    db::restaurants::get_active(&state.pool, id).await?;
    let menu = db::menu_items::views_for_restaurant(&state.pool, id).await?;
    Ok(Json(menu))
}

// ── Admin CRUD ──

/// POST /api/restaurants (admin)
pub async fn create_restaurant(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(data): Json<RestaurantCreate>,
) -> ApiResult<Restaurant> {
    identity.require_admin()?;
    validate_name(&data.name)?;

    let restaurant = db::restaurants::create(&state.pool, &data).await?;
    Ok(Json(restaurant))
}

/// PUT /api/restaurants/{id} (admin)
pub async fn update_restaurant(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<RestaurantUpdate>,
) -> ApiResult<Restaurant> {
    identity.require_admin()?;
    if let Some(ref name) = data.name {
        validate_name(name)?;
    }

    let restaurant = db::restaurants::update(&state.pool, id, &data).await?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id} (admin) — cascades to tables, stalls, menu
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    identity.require_admin()?;

    db::restaurants::delete(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Restaurant deleted" })))
}

// Same check on create and update paths
fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    Ok(())
}
