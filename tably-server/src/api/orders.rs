//! Order API handlers
//!
//! All routes require an authenticated caller and are scoped to the orders
//! that caller placed; staff status transitions additionally require the
//! admin role.

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, State},
    routing::{get, post},
};
use shared::models::notification::NotificationKind;
use shared::models::order::{Order, OrderCreate, OrderUpdateStatus, OrderWithItems};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
        .route("/{id}/cancel", post(cancel_order))
        .route("/{id}/status", post(update_order_status))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/orders", routes)
}

/// GET /api/orders — caller's orders, newest first
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<Vec<OrderWithItems>> {
    let orders = db::orders::list_for_user(&state.pool, identity.user_id).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} — foreign orders report NotFound, never the data
pub async fn get_order(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<OrderWithItems> {
    let order = db::orders::get_for_user(&state.pool, identity.user_id, id).await?;
    Ok(Json(order))
}

/// POST /api/orders — create from a cart of menu-item references
pub async fn create_order(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(data): Json<OrderCreate>,
) -> ApiResult<OrderWithItems> {
    db::restaurants::get_active(&state.pool, data.restaurant_id).await?;

    let order = db::orders::create(&state.pool, identity.user_id, &data).await?;

    // Best-effort feed entry; order placement does not depend on it
    let _ = db::notifications::push(
        &state.pool,
        identity.user_id,
        NotificationKind::Success,
        &format!("Order #{} placed successfully", order.order.id),
    )
    .await;

    Ok(Json(order))
}

/// POST /api/orders/{id}/cancel — legal only while pending
pub async fn cancel_order(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let order = db::orders::cancel(&state.pool, identity.user_id, id).await?;

    let _ = db::notifications::push(
        &state.pool,
        identity.user_id,
        NotificationKind::Warning,
        &format!("Order #{} cancelled", order.id),
    )
    .await;

    Ok(Json(serde_json::json!({ "status": "Order cancelled successfully" })))
}

/// POST /api/orders/{id}/status (admin) — staff-driven forward transition
pub async fn update_order_status(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<OrderUpdateStatus>,
) -> ApiResult<Order> {
    identity.require_admin()?;

    let order = db::orders::update_status(&state.pool, id, data.status).await?;

    let _ = db::notifications::push(
        &state.pool,
        order.user_id,
        NotificationKind::Info,
        &format!("Order #{} is now {}", order.id, order.status.as_str()),
    )
    .await;

    Ok(Json(order))
}
