//! Wallet database operations
//!
//! The balance column is denormalized; every change to it commits in the same
//! transaction as its ledger entry, so recomputing the balance from the
//! append-only transaction history always agrees.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::wallet::{Wallet, WalletTransaction, WalletView};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

/// Fetch the caller's wallet, creating an empty one on first access.
pub async fn get_or_create(pool: &PgPool, user_id: i64) -> AppResult<Wallet> {
    let now = now_millis();
    sqlx::query(
        r#"
        INSERT INTO wallets (id, user_id, balance, currency, created_at, updated_at)
        VALUES ($1, $2, 0, 'USD', $3, $3)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(snowflake_id())
    .bind(user_id)
    .bind(now)
    .execute(pool)
    .await?;

    let wallet: Wallet = sqlx::query_as("SELECT * FROM wallets WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(wallet)
}

/// Wallet with its transaction history, newest first.
pub async fn view(pool: &PgPool, user_id: i64) -> AppResult<WalletView> {
    let wallet = get_or_create(pool, user_id).await?;

    let transactions: Vec<WalletTransaction> = sqlx::query_as(
        "SELECT * FROM wallet_transactions WHERE wallet_id = $1 ORDER BY created_at DESC",
    )
    .bind(wallet.id)
    .fetch_all(pool)
    .await?;

    Ok(WalletView {
        wallet,
        transactions,
    })
}

/// Credit the wallet: balance update and ledger insert commit together.
///
/// The ownership check rides on the UPDATE's WHERE clause: a foreign wallet
/// id affects zero rows and reports `WalletNotFound`, never the data.
pub async fn add_money(
    pool: &PgPool,
    wallet_id: i64,
    user_id: i64,
    amount: Decimal,
) -> AppResult<Wallet> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE wallets SET balance = balance + $1, updated_at = $2 \
         WHERE id = $3 AND user_id = $4",
    )
    .bind(amount)
    .bind(now)
    .bind(wallet_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::WalletNotFound));
    }

    sqlx::query(
        r#"
        INSERT INTO wallet_transactions (
            id, wallet_id, tx_type, amount, description, created_at
        )
        VALUES ($1, $2, 'credit', $3, 'Added money to wallet', $4)
        "#,
    )
    .bind(snowflake_id())
    .bind(wallet_id)
    .bind(amount)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let wallet: Wallet = sqlx::query_as("SELECT * FROM wallets WHERE id = $1")
        .bind(wallet_id)
        .fetch_one(pool)
        .await?;
    Ok(wallet)
}
