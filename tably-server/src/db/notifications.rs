//! Notification database operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::notification::{Notification, NotificationKind};
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

pub async fn list_for_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<Notification>> {
    let rows: Vec<Notification> =
        sqlx::query_as("SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

/// Idempotent: re-marking an already-read notification succeeds and changes
/// nothing. Zero affected rows means the id is missing or foreign-owned.
pub async fn mark_read(pool: &PgPool, user_id: i64, id: i64) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::NotificationNotFound));
    }
    Ok(())
}

/// Append a notification to a user's feed.
pub async fn push(
    pool: &PgPool,
    user_id: i64,
    kind: NotificationKind,
    message: &str,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO notifications (id, user_id, kind, message, read, created_at)
        VALUES ($1, $2, $3, $4, FALSE, $5)
        "#,
    )
    .bind(snowflake_id())
    .bind(user_id)
    .bind(kind)
    .bind(message)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(())
}
