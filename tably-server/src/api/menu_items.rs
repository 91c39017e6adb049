//! Menu item and review API handlers

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, Query, State},
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::menu_item::{MenuItemCreate, MenuItemUpdate, MenuItemView};
use shared::models::review::{Review, ReviewCreate};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;
use super::restaurants::SearchQuery;

pub fn router(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/", get(list_menu_items))
        .route("/{id}", get(get_menu_item))
        .route("/{id}/reviews", get(list_reviews));

    let review_routes = Router::new()
        .route("/{id}/reviews", post(create_review))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    let manage_routes = Router::new()
        .route("/", post(create_menu_item))
        .route("/{id}", put(update_menu_item).delete(delete_menu_item))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest(
        "/api/menu-items",
        read_routes.merge(review_routes).merge(manage_routes),
    )
}

/// GET /api/menu-items — available items, searchable
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<MenuItemView>> {
    let items = db::menu_items::list(&state.pool, query.search.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<MenuItemView> {
    let item = db::menu_items::get_view(&state.pool, id).await?;
    Ok(Json(item))
}

// ── Reviews ──

/// GET /api/menu-items/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<Review>> {
    let reviews = db::menu_items::reviews_for_item(&state.pool, id).await?;
    Ok(Json(reviews))
}

/// POST /api/menu-items/{id}/reviews — one review per user per item
pub async fn create_review(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<ReviewCreate>,
) -> ApiResult<Review> {
    if !(1..=5).contains(&data.rating) {
        return Err(AppError::new(ErrorCode::RatingOutOfRange));
    }

    let review = db::menu_items::create_review(
        &state.pool,
        id,
        identity.user_id,
        data.rating,
        data.comment.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(review))
}

// ── Admin CRUD ──

/// POST /api/menu-items (admin)
pub async fn create_menu_item(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(data): Json<MenuItemCreate>,
) -> ApiResult<MenuItemView> {
    identity.require_admin()?;
    validate_price(Some(data.price))?;

    db::restaurants::get_active(&state.pool, data.restaurant_id).await?;
    if let Some(stall_id) = data.stall_id {
        db::stalls::get(&state.pool, stall_id).await?;
    }

    let item = db::menu_items::create(&state.pool, &data).await?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id} (admin)
pub async fn update_menu_item(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<MenuItemUpdate>,
) -> ApiResult<MenuItemView> {
    identity.require_admin()?;
    validate_price(data.price)?;

    let item = db::menu_items::update(&state.pool, id, &data).await?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id} (admin) — refused while orders reference it
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    identity.require_admin()?;

    db::menu_items::delete(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "status": "Menu item deleted" })))
}

// Same check on create and update paths
fn validate_price(price: Option<Decimal>) -> Result<(), AppError> {
    if let Some(price) = price
        && price < Decimal::ZERO
    {
        return Err(AppError::validation("Price must not be negative"));
    }
    Ok(())
}
