//! Restaurant database operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::restaurant::{Restaurant, RestaurantCreate, RestaurantDetail, RestaurantUpdate};
use shared::models::stall::StallWithMenu;
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

use super::{menu_items, stalls, tables};

/// Active restaurants, optionally filtered by a substring match over
/// name/description/location fields.
pub async fn list(pool: &PgPool, search: Option<&str>) -> AppResult<Vec<Restaurant>> {
    let rows: Vec<Restaurant> = sqlx::query_as(
        r#"
        SELECT *
        FROM restaurants
        WHERE is_active
          AND ($1::TEXT IS NULL
               OR name ILIKE '%' || $1 || '%'
               OR description ILIKE '%' || $1 || '%'
               OR city ILIKE '%' || $1 || '%'
               OR state ILIKE '%' || $1 || '%'
               OR country ILIKE '%' || $1 || '%')
        ORDER BY name
        "#,
    )
    .bind(search)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch an active restaurant by id.
pub async fn get_active(pool: &PgPool, id: i64) -> AppResult<Restaurant> {
    let row: Option<Restaurant> =
        sqlx::query_as("SELECT * FROM restaurants WHERE id = $1 AND is_active")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))
}

/// Restaurant detail with nested available tables, active stalls (each with
/// its menu), and the restaurant-level menu.
pub async fn detail(pool: &PgPool, id: i64) -> AppResult<RestaurantDetail> {
    let restaurant = get_active(pool, id).await?;
    let tables = tables::list_available_for_restaurant(pool, id).await?;
    let stall_rows = stalls::list_active_for_restaurant(pool, id).await?;
    let menu = menu_items::views_for_restaurant(pool, id).await?;

    // Items without a stall stay on the restaurant-level menu only.
    let stalls = stall_rows
        .into_iter()
        .map(|stall| {
            let stall_menu = menu
                .iter()
                .filter(|v| v.item.stall_id == Some(stall.id))
                .cloned()
                .collect();
            StallWithMenu {
                stall,
                menu: stall_menu,
            }
        })
        .collect();

    Ok(RestaurantDetail {
        restaurant,
        tables,
        stalls,
        menu,
    })
}

// ── Admin CRUD ──

pub async fn create(pool: &PgPool, data: &RestaurantCreate) -> AppResult<Restaurant> {
    let now = now_millis();
    let id = snowflake_id();

    sqlx::query(
        r#"
        INSERT INTO restaurants (
            id, name, description, logo, venue_type, country, state, city, address,
            latitude, longitude, opening_time, closing_time, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, TRUE, $14, $14)
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(data.logo.as_deref().unwrap_or(""))
    .bind(data.venue_type)
    .bind(data.country.as_deref().unwrap_or(""))
    .bind(data.state.as_deref().unwrap_or(""))
    .bind(data.city.as_deref().unwrap_or(""))
    .bind(&data.address)
    .bind(data.latitude)
    .bind(data.longitude)
    .bind(&data.opening_time)
    .bind(&data.closing_time)
    .bind(now)
    .execute(pool)
    .await?;

    get_any(pool, id).await
}

pub async fn update(pool: &PgPool, id: i64, data: &RestaurantUpdate) -> AppResult<Restaurant> {
    let now = now_millis();

    let result = sqlx::query(
        r#"
        UPDATE restaurants SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            logo = COALESCE($3, logo),
            venue_type = COALESCE($4, venue_type),
            country = COALESCE($5, country),
            state = COALESCE($6, state),
            city = COALESCE($7, city),
            address = COALESCE($8, address),
            latitude = COALESCE($9, latitude),
            longitude = COALESCE($10, longitude),
            opening_time = COALESCE($11, opening_time),
            closing_time = COALESCE($12, closing_time),
            is_active = COALESCE($13, is_active),
            updated_at = $14
        WHERE id = $15
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.logo)
    .bind(data.venue_type)
    .bind(&data.country)
    .bind(&data.state)
    .bind(&data.city)
    .bind(&data.address)
    .bind(data.latitude)
    .bind(data.longitude)
    .bind(&data.opening_time)
    .bind(&data.closing_time)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }

    get_any(pool, id).await
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }
    Ok(())
}

/// Fetch by id regardless of the active flag (admin paths).
async fn get_any(pool: &PgPool, id: i64) -> AppResult<Restaurant> {
    let row: Option<Restaurant> = sqlx::query_as("SELECT * FROM restaurants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))
}
