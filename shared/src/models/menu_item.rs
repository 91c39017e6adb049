//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "menu_category", rename_all = "snake_case"))]
pub enum MenuCategory {
    Veg,
    NonVeg,
    Drink,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    /// Food-court stall offering this item, if any
    pub stall_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: MenuCategory,
    pub sub_category: String,
    /// Blob-store path, served externally
    pub image: String,
    pub available: bool,
    /// Preparation time in minutes
    pub preparation_time: i32,
    pub featured: bool,
    pub calories: Option<i32>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: i64,
    pub stall_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: MenuCategory,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub preparation_time: Option<i32>,
    pub featured: Option<bool>,
    pub calories: Option<i32>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub stall_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<MenuCategory>,
    pub sub_category: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
    pub preparation_time: Option<i32>,
    pub featured: Option<bool>,
    pub calories: Option<i32>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
}

/// Menu item projection with tags, ingredients, and the rating summary
/// computed from reviews on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemView {
    #[serde(flatten)]
    pub item: MenuItem,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    /// Mean review rating; `null` when the item has no reviews
    pub rating: Option<f64>,
    pub rating_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names() {
        assert_eq!(serde_json::to_string(&MenuCategory::Veg).unwrap(), "\"veg\"");
        assert_eq!(
            serde_json::to_string(&MenuCategory::NonVeg).unwrap(),
            "\"non_veg\""
        );
        assert_eq!(
            serde_json::to_string(&MenuCategory::Drink).unwrap(),
            "\"drink\""
        );
    }
}
