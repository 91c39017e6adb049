//! Wallet API handlers

use axum::{
    Extension, Json, Router, middleware,
    extract::{Path, State},
    routing::{get, post},
};
use shared::models::notification::NotificationKind;
use shared::models::wallet::{AddMoneyRequest, WalletView, parse_amount};

use crate::auth::{UserIdentity, user_auth_middleware};
use crate::db;
use crate::state::AppState;

use super::ApiResult;

pub fn router(state: &AppState) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(get_wallet))
        .route("/{id}/add_money", post(add_money))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new().nest("/api/wallet", routes)
}

/// GET /api/wallet — caller's wallet with its transaction history,
/// created lazily on first access
pub async fn get_wallet(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<WalletView> {
    let wallet = db::wallet::view(&state.pool, identity.user_id).await?;
    Ok(Json(wallet))
}

/// POST /api/wallet/{id}/add_money — body `{"amount": "10.50"}`
///
/// The amount must parse as a strictly positive decimal; anything else fails
/// with InvalidAmount before any mutation. Balance update and ledger insert
/// commit as one transaction.
pub async fn add_money(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<i64>,
    Json(data): Json<AddMoneyRequest>,
) -> ApiResult<serde_json::Value> {
    let amount = parse_amount(&data.amount)?;

    let wallet = db::wallet::add_money(&state.pool, id, identity.user_id, amount).await?;

    let _ = db::notifications::push(
        &state.pool,
        identity.user_id,
        NotificationKind::Success,
        &format!("Added {} {} to wallet", amount, wallet.currency),
    )
    .await;

    Ok(Json(serde_json::json!({ "status": "Money added successfully" })))
}
