//! Notification Model

use serde::{Deserialize, Serialize};

/// Notification kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "notification_kind", rename_all = "snake_case"))]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Per-user notification; append-only with a read flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: i64,
}
