//! Order database operations
//!
//! Order creation is a single transaction: the order row, every line item
//! (with its price snapshot), and the computed total commit together or not
//! at all. Reads and mutations are scoped to the owning user; a foreign order
//! id behaves exactly like a missing one.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::order::{Order, OrderCreate, OrderItem, OrderStatus, OrderWithItems};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

pub async fn list_for_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<OrderWithItems>> {
    let orders: Vec<Order> =
        sqlx::query_as("SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    let items: Vec<OrderItem> = sqlx::query_as(
        "SELECT * FROM order_items WHERE order_id = ANY($1) ORDER BY created_at",
    )
    .bind(&order_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: std::collections::HashMap<i64, Vec<OrderItem>> =
        std::collections::HashMap::new();
    for item in items {
        grouped.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| OrderWithItems {
            items: grouped.remove(&order.id).unwrap_or_default(),
            order,
        })
        .collect())
}

pub async fn get_for_user(pool: &PgPool, user_id: i64, id: i64) -> AppResult<OrderWithItems> {
    let order: Option<Order> = sqlx::query_as("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let order = order.ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    let items: Vec<OrderItem> =
        sqlx::query_as("SELECT * FROM order_items WHERE order_id = $1 ORDER BY created_at")
            .bind(id)
            .fetch_all(pool)
            .await?;

    Ok(OrderWithItems { order, items })
}

/// Create an order from a cart of menu-item references.
///
/// Each line resolves the menu item's current price inside the transaction
/// and snapshots `unit price × quantity` into the persisted row, so later
/// menu price changes never touch past orders.
pub async fn create(pool: &PgPool, user_id: i64, data: &OrderCreate) -> AppResult<OrderWithItems> {
    if data.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    for line in &data.items {
        if line.quantity < 1 {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("menu_item_id", line.menu_item_id.to_string()));
        }
    }

    let now = now_millis();
    let order_id = snowflake_id();
    let mut tx = pool.begin().await?;

    let table: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM dining_tables WHERE id = $1 AND restaurant_id = $2")
            .bind(data.table_id)
            .bind(data.restaurant_id)
            .fetch_optional(&mut *tx)
            .await?;
    if table.is_none() {
        return Err(AppError::new(ErrorCode::TableNotFound));
    }

    sqlx::query(
        r#"
        INSERT INTO orders (
            id, user_id, restaurant_id, table_id, status, total_amount, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, 'pending', 0, $5, $5)
        "#,
    )
    .bind(order_id)
    .bind(user_id)
    .bind(data.restaurant_id)
    .bind(data.table_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let mut total = Decimal::ZERO;
    for line in &data.items {
        let menu_item: Option<(Decimal, bool)> = sqlx::query_as(
            "SELECT price, available FROM menu_items WHERE id = $1 AND restaurant_id = $2",
        )
        .bind(line.menu_item_id)
        .bind(data.restaurant_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (unit_price, available) = menu_item.ok_or_else(|| {
            AppError::new(ErrorCode::MenuItemNotFound)
                .with_detail("menu_item_id", line.menu_item_id.to_string())
        })?;
        if !available {
            return Err(AppError::new(ErrorCode::MenuItemUnavailable)
                .with_detail("menu_item_id", line.menu_item_id.to_string()));
        }

        let line_total = line.line_total(unit_price);
        total += line_total;

        sqlx::query(
            r#"
            INSERT INTO order_items (
                id, order_id, menu_item_id, stall_id, quantity, price,
                special_instructions, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(snowflake_id())
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(line.stall_id)
        .bind(line.quantity)
        .bind(line_total)
        .bind(line.special_instructions.as_deref().unwrap_or(""))
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("UPDATE orders SET total_amount = $1 WHERE id = $2")
        .bind(total)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    get_for_user(pool, user_id, order_id).await
}

/// User-initiated cancellation; legal only from `pending`.
pub async fn cancel(pool: &PgPool, user_id: i64, id: i64) -> AppResult<Order> {
    let result = sqlx::query(
        "UPDATE orders SET status = 'cancelled', updated_at = $3 \
         WHERE id = $1 AND user_id = $2 AND status = 'pending'",
    )
    .bind(id)
    .bind(user_id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        // Distinguish a foreign/missing order (404) from an illegal transition
        let current = get_for_user(pool, user_id, id).await?;
        return Err(AppError::new(ErrorCode::InvalidTransition)
            .with_detail("status", serde_json::to_value(current.order.status).unwrap_or_default()));
    }

    Ok(get_for_user(pool, user_id, id).await?.order)
}

/// Staff-driven status transition (admin only); the status guard in the
/// WHERE clause keeps concurrent updates from double-applying.
pub async fn update_status(pool: &PgPool, id: i64, next: OrderStatus) -> AppResult<Order> {
    let order: Option<Order> = sqlx::query_as("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let order = order.ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    if !order.status.can_transition_to(next) {
        return Err(AppError::new(ErrorCode::InvalidTransition)
            .with_detail("from", serde_json::to_value(order.status).unwrap_or_default())
            .with_detail("to", serde_json::to_value(next).unwrap_or_default()));
    }

    let result = sqlx::query(
        "UPDATE orders SET status = $2, updated_at = $3 WHERE id = $1 AND status = $4",
    )
    .bind(id)
    .bind(next)
    .bind(now_millis())
    .bind(order.status)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::InvalidTransition));
    }

    let updated: Order = sqlx::query_as("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(updated)
}
