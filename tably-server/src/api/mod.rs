//! API routes
//!
//! Catalog routes are public; orders, wallet, notifications, review writes,
//! and all admin catalog management require a verified caller identity.

pub mod health;
pub mod menu_items;
pub mod notifications;
pub mod orders;
pub mod restaurants;
pub mod stalls;
pub mod tables;
pub mod wallet;

use axum::{Router, routing::get};
use shared::error::AppError;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(restaurants::router(&state))
        .merge(tables::router(&state))
        .merge(stalls::router(&state))
        .merge(menu_items::router(&state))
        .merge(orders::router(&state))
        .merge(wallet::router(&state))
        .merge(notifications::router(&state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
