//! Restaurant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dining_table::DiningTable;
use super::menu_item::MenuItemView;
use super::stall::StallWithMenu;

/// Venue type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "venue_type", rename_all = "snake_case"))]
pub enum VenueType {
    Restaurant,
    FoodCourt,
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Blob-store path, served externally
    pub logo: String,
    pub venue_type: VenueType,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// "HH:MM", local to the venue
    pub opening_time: String,
    pub closing_time: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub venue_type: VenueType,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub opening_time: String,
    pub closing_time: String,
}

/// Update restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub venue_type: Option<VenueType>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub is_active: Option<bool>,
}

/// Restaurant detail with nested tables, stalls, and menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub tables: Vec<DiningTable>,
    pub stalls: Vec<StallWithMenu>,
    pub menu: Vec<MenuItemView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&VenueType::Restaurant).unwrap(),
            "\"restaurant\""
        );
        assert_eq!(
            serde_json::to_string(&VenueType::FoodCourt).unwrap(),
            "\"food_court\""
        );
    }
}
