//! Menu item database operations
//!
//! Read paths return [`MenuItemView`] projections: the item row plus its
//! tags, ingredients, and a rating summary recomputed from reviews on every
//! read (no caching).

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuItemView};
use shared::models::review::{RatingSummary, Review};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

use super::tables::is_unique_violation;

/// Available menu items, optionally filtered by a substring match over
/// name/description/sub_category.
pub async fn list(pool: &PgPool, search: Option<&str>) -> AppResult<Vec<MenuItemView>> {
    let items: Vec<MenuItem> = sqlx::query_as(
        r#"
        SELECT *
        FROM menu_items
        WHERE available
          AND ($1::TEXT IS NULL
               OR name ILIKE '%' || $1 || '%'
               OR description ILIKE '%' || $1 || '%'
               OR sub_category ILIKE '%' || $1 || '%')
        ORDER BY name
        "#,
    )
    .bind(search)
    .fetch_all(pool)
    .await?;
    views_from_items(pool, items).await
}

/// Available menu of one restaurant.
pub async fn views_for_restaurant(
    pool: &PgPool,
    restaurant_id: i64,
) -> AppResult<Vec<MenuItemView>> {
    let items: Vec<MenuItem> = sqlx::query_as(
        "SELECT * FROM menu_items WHERE restaurant_id = $1 AND available ORDER BY name",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    views_from_items(pool, items).await
}

/// Available menu item by id.
pub async fn get_view(pool: &PgPool, id: i64) -> AppResult<MenuItemView> {
    let item: Option<MenuItem> =
        sqlx::query_as("SELECT * FROM menu_items WHERE id = $1 AND available")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    let item = item.ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    let mut views = views_from_items(pool, vec![item]).await?;
    Ok(views.remove(0))
}

/// Attach tags, ingredients, and rating summaries to a batch of items.
async fn views_from_items(pool: &PgPool, items: Vec<MenuItem>) -> AppResult<Vec<MenuItemView>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();

    let tag_rows: Vec<(i64, String)> = sqlx::query_as(
        "SELECT menu_item_id, name FROM menu_item_tags WHERE menu_item_id = ANY($1) ORDER BY name",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let ingredient_rows: Vec<(i64, String)> = sqlx::query_as(
        "SELECT menu_item_id, name FROM menu_item_ingredients \
         WHERE menu_item_id = ANY($1) ORDER BY name",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let rating_rows: Vec<(i64, i32)> =
        sqlx::query_as("SELECT menu_item_id, rating FROM reviews WHERE menu_item_id = ANY($1)")
            .bind(&ids)
            .fetch_all(pool)
            .await?;

    let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
    for (item_id, name) in tag_rows {
        tags.entry(item_id).or_default().push(name);
    }
    let mut ingredients: HashMap<i64, Vec<String>> = HashMap::new();
    for (item_id, name) in ingredient_rows {
        ingredients.entry(item_id).or_default().push(name);
    }
    let mut ratings: HashMap<i64, Vec<i32>> = HashMap::new();
    for (item_id, rating) in rating_rows {
        ratings.entry(item_id).or_default().push(rating);
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let summary = RatingSummary::from_ratings(
                ratings.get(&item.id).map(|r| r.as_slice()).unwrap_or(&[]),
            );
            MenuItemView {
                tags: tags.remove(&item.id).unwrap_or_default(),
                ingredients: ingredients.remove(&item.id).unwrap_or_default(),
                rating: summary.average,
                rating_count: summary.count,
                item,
            }
        })
        .collect())
}

// ── Reviews ──

pub async fn reviews_for_item(pool: &PgPool, menu_item_id: i64) -> AppResult<Vec<Review>> {
    // 404 for unknown items rather than an empty list
    get_view(pool, menu_item_id).await?;

    let rows: Vec<Review> = sqlx::query_as(
        "SELECT * FROM reviews WHERE menu_item_id = $1 ORDER BY created_at DESC",
    )
    .bind(menu_item_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a review; `(menu_item_id, user_id)` uniqueness makes a second
/// review from the same user fail with `DuplicateReview`.
pub async fn create_review(
    pool: &PgPool,
    menu_item_id: i64,
    user_id: i64,
    rating: i32,
    comment: &str,
) -> AppResult<Review> {
    get_view(pool, menu_item_id).await?;

    let now = now_millis();
    let id = snowflake_id();

    let result = sqlx::query(
        r#"
        INSERT INTO reviews (id, menu_item_id, user_id, rating, comment, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        "#,
    )
    .bind(id)
    .bind(menu_item_id)
    .bind(user_id)
    .bind(rating)
    .bind(comment)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::new(ErrorCode::DuplicateReview));
        }
        Err(e) => return Err(e.into()),
    }

    let row: Review = sqlx::query_as("SELECT * FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

// ── Admin CRUD ──

/// Insert the item and its tag/ingredient children as one unit.
pub async fn create(pool: &PgPool, data: &MenuItemCreate) -> AppResult<MenuItemView> {
    let now = now_millis();
    let id = snowflake_id();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO menu_items (
            id, restaurant_id, stall_id, name, description, price, category, sub_category,
            image, available, preparation_time, featured, calories, protein, carbs, fat,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $11, $12, $13, $14, $15, $16, $16)
        "#,
    )
    .bind(id)
    .bind(data.restaurant_id)
    .bind(data.stall_id)
    .bind(&data.name)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(data.price)
    .bind(data.category)
    .bind(data.sub_category.as_deref().unwrap_or(""))
    .bind(data.image.as_deref().unwrap_or(""))
    .bind(data.preparation_time.unwrap_or(0))
    .bind(data.featured.unwrap_or(false))
    .bind(data.calories)
    .bind(data.protein)
    .bind(data.carbs)
    .bind(data.fat)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for name in data.tags.iter().flatten() {
        sqlx::query(
            "INSERT INTO menu_item_tags (id, menu_item_id, name, created_at) \
             VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
        )
        .bind(snowflake_id())
        .bind(id)
        .bind(name)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }
    for name in data.ingredients.iter().flatten() {
        sqlx::query(
            "INSERT INTO menu_item_ingredients (id, menu_item_id, name, created_at) \
             VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
        )
        .bind(snowflake_id())
        .bind(id)
        .bind(name)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get_any_view(pool, id).await
}

pub async fn update(pool: &PgPool, id: i64, data: &MenuItemUpdate) -> AppResult<MenuItemView> {
    let result = sqlx::query(
        r#"
        UPDATE menu_items SET
            stall_id = COALESCE($1, stall_id),
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            category = COALESCE($5, category),
            sub_category = COALESCE($6, sub_category),
            image = COALESCE($7, image),
            available = COALESCE($8, available),
            preparation_time = COALESCE($9, preparation_time),
            featured = COALESCE($10, featured),
            calories = COALESCE($11, calories),
            protein = COALESCE($12, protein),
            carbs = COALESCE($13, carbs),
            fat = COALESCE($14, fat),
            updated_at = $15
        WHERE id = $16
        "#,
    )
    .bind(data.stall_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.category)
    .bind(&data.sub_category)
    .bind(&data.image)
    .bind(data.available)
    .bind(data.preparation_time)
    .bind(data.featured)
    .bind(data.calories)
    .bind(data.protein)
    .bind(data.carbs)
    .bind(data.fat)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::MenuItemNotFound));
    }

    get_any_view(pool, id).await
}

/// Hard delete; fails while any order item still references this row
/// (RESTRICT at the store layer).
pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await;

    match result {
        Ok(r) if r.rows_affected() == 0 => Err(AppError::new(ErrorCode::MenuItemNotFound)),
        Ok(_) => Ok(()),
        Err(e)
            if e.as_database_error()
                .is_some_and(|d| d.is_foreign_key_violation()) =>
        {
            Err(AppError::with_message(
                ErrorCode::ValidationFailed,
                "Menu item is referenced by existing orders",
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch by id regardless of availability (admin paths).
async fn get_any_view(pool: &PgPool, id: i64) -> AppResult<MenuItemView> {
    let item: Option<MenuItem> = sqlx::query_as("SELECT * FROM menu_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let item = item.ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    let mut views = views_from_items(pool, vec![item]).await?;
    Ok(views.remove(0))
}
