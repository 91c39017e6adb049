//! Dining table database operations
//!
//! The lock/unlock flag is flipped with a single conditional UPDATE
//! (compare-and-set on `is_locked`), so two concurrent lock attempts cannot
//! both succeed.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

pub async fn list(pool: &PgPool) -> AppResult<Vec<DiningTable>> {
    let rows: Vec<DiningTable> =
        sqlx::query_as("SELECT * FROM dining_tables ORDER BY restaurant_id, number")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<DiningTable> {
    let row: Option<DiningTable> = sqlx::query_as("SELECT * FROM dining_tables WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| AppError::new(ErrorCode::TableNotFound))
}

pub async fn list_available_for_restaurant(
    pool: &PgPool,
    restaurant_id: i64,
) -> AppResult<Vec<DiningTable>> {
    let rows: Vec<DiningTable> = sqlx::query_as(
        "SELECT * FROM dining_tables WHERE restaurant_id = $1 AND is_available ORDER BY number",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Acquire the advisory table lock.
///
/// The WHERE clause only matches an unlocked row; zero affected rows on an
/// existing table means it was already locked.
pub async fn lock(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE dining_tables SET is_locked = TRUE, updated_at = $2 \
         WHERE id = $1 AND is_locked = FALSE",
    )
    .bind(id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        get(pool, id).await?;
        return Err(AppError::new(ErrorCode::TableAlreadyLocked));
    }
    Ok(())
}

/// Release the advisory table lock; symmetric to [`lock`].
pub async fn unlock(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE dining_tables SET is_locked = FALSE, updated_at = $2 \
         WHERE id = $1 AND is_locked = TRUE",
    )
    .bind(id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        get(pool, id).await?;
        return Err(AppError::new(ErrorCode::TableNotLocked));
    }
    Ok(())
}

// ── Admin CRUD ──

pub async fn create(pool: &PgPool, data: &DiningTableCreate) -> AppResult<DiningTable> {
    let now = now_millis();
    let id = snowflake_id();
    let qr_code = uuid::Uuid::new_v4().to_string();
    let seats = data.seats.unwrap_or(4);

    let result = sqlx::query(
        r#"
        INSERT INTO dining_tables (
            id, restaurant_id, number, seats, qr_code, table_type,
            is_available, is_locked, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, TRUE, FALSE, $7, $7)
        "#,
    )
    .bind(id)
    .bind(data.restaurant_id)
    .bind(data.number)
    .bind(seats)
    .bind(&qr_code)
    .bind(data.table_type)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => get(pool, id).await,
        Err(e) if is_unique_violation(&e) => Err(AppError::with_message(
            ErrorCode::AlreadyExists,
            "Table number already used in this restaurant",
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn update(pool: &PgPool, id: i64, data: &DiningTableUpdate) -> AppResult<DiningTable> {
    let result = sqlx::query(
        r#"
        UPDATE dining_tables SET
            number = COALESCE($1, number),
            seats = COALESCE($2, seats),
            table_type = COALESCE($3, table_type),
            is_available = COALESCE($4, is_available),
            updated_at = $5
        WHERE id = $6
        "#,
    )
    .bind(data.number)
    .bind(data.seats)
    .bind(data.table_type)
    .bind(data.is_available)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await;

    match result {
        Ok(r) if r.rows_affected() == 0 => Err(AppError::new(ErrorCode::TableNotFound)),
        Ok(_) => get(pool, id).await,
        Err(e) if is_unique_violation(&e) => Err(AppError::with_message(
            ErrorCode::AlreadyExists,
            "Table number already used in this restaurant",
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM dining_tables WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::TableNotFound));
    }
    Ok(())
}

pub(super) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|d| d.is_unique_violation())
}
