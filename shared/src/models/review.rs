//! Review Model

use serde::{Deserialize, Serialize};

/// Review entity; `(menu_item_id, user_id)` is unique, one review per user
/// per menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Review {
    pub id: i64,
    pub menu_item_id: i64,
    pub user_id: i64,
    /// 1..=5
    pub rating: i32,
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: i32,
    pub comment: Option<String>,
}

/// Rating summary for a menu item, recomputed from its reviews on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Arithmetic mean; `None` when there are no reviews
    pub average: Option<f64>,
    pub count: i64,
}

impl RatingSummary {
    /// Aggregate a slice of ratings. Zero reviews yield `average: None`
    /// rather than zero or a division error.
    pub fn from_ratings(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self {
                average: None,
                count: 0,
            };
        }
        let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
        Self {
            average: Some(sum as f64 / ratings.len() as f64),
            count: ratings.len() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_reviews_yields_none() {
        let summary = RatingSummary::from_ratings(&[]);
        assert_eq!(summary.average, None);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn mean_of_two_ratings() {
        let summary = RatingSummary::from_ratings(&[4, 5]);
        assert_eq!(summary.average, Some(4.5));
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn single_rating() {
        let summary = RatingSummary::from_ratings(&[3]);
        assert_eq!(summary.average, Some(3.0));
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn no_rating_serializes_as_null() {
        let json = serde_json::to_string(&RatingSummary::from_ratings(&[])).unwrap();
        assert_eq!(json, "{\"average\":null,\"count\":0}");
    }
}
