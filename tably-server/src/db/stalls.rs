//! Stall database operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::stall::{Stall, StallCreate, StallUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Stall> {
    let row: Option<Stall> = sqlx::query_as("SELECT * FROM stalls WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| AppError::new(ErrorCode::StallNotFound))
}

pub async fn list_active_for_restaurant(
    pool: &PgPool,
    restaurant_id: i64,
) -> AppResult<Vec<Stall>> {
    let rows: Vec<Stall> = sqlx::query_as(
        "SELECT * FROM stalls WHERE restaurant_id = $1 AND is_active ORDER BY name",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ── Admin CRUD ──

pub async fn create(pool: &PgPool, data: &StallCreate) -> AppResult<Stall> {
    let now = now_millis();
    let id = snowflake_id();

    sqlx::query(
        r#"
        INSERT INTO stalls (
            id, restaurant_id, name, description, logo, cuisine,
            is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
        "#,
    )
    .bind(id)
    .bind(data.restaurant_id)
    .bind(&data.name)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(data.logo.as_deref().unwrap_or(""))
    .bind(&data.cuisine)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, id).await
}

pub async fn update(pool: &PgPool, id: i64, data: &StallUpdate) -> AppResult<Stall> {
    let result = sqlx::query(
        r#"
        UPDATE stalls SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            logo = COALESCE($3, logo),
            cuisine = COALESCE($4, cuisine),
            is_active = COALESCE($5, is_active),
            updated_at = $6
        WHERE id = $7
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.logo)
    .bind(&data.cuisine)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::StallNotFound));
    }

    get(pool, id).await
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM stalls WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::StallNotFound));
    }
    Ok(())
}
