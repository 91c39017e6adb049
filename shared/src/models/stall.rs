//! Stall Model (food-court vendor inside a restaurant)

use serde::{Deserialize, Serialize};

use super::menu_item::MenuItemView;

/// Stall entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Stall {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub cuisine: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create stall payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StallCreate {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub cuisine: String,
}

/// Update stall payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StallUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub cuisine: Option<String>,
    pub is_active: Option<bool>,
}

/// Stall with its available menu items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StallWithMenu {
    #[serde(flatten)]
    pub stall: Stall,
    pub menu: Vec<MenuItemView>,
}
