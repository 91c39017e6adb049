//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "table_type", rename_all = "snake_case"))]
pub enum TableType {
    Private,
    Shared,
}

/// Dining table entity
///
/// `qr_code` is the globally unique identifier printed on the physical table;
/// `(restaurant_id, number)` is unique per venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub restaurant_id: i64,
    pub number: i32,
    pub seats: i32,
    pub qr_code: String,
    pub table_type: TableType,
    pub is_available: bool,
    pub is_locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub restaurant_id: i64,
    pub number: i32,
    pub seats: Option<i32>,
    pub table_type: TableType,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub number: Option<i32>,
    pub seats: Option<i32>,
    pub table_type: Option<TableType>,
    pub is_available: Option<bool>,
}
