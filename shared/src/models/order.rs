//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Lifecycle is forward-only: `pending → confirmed → preparing → ready →
/// delivered`, with `pending → cancelled` as the only exit besides the
/// forward path. `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "order_status", rename_all = "snake_case"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Preparing)
                | (Preparing, Ready)
                | (Ready, Delivered)
        )
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Wire name of the status, for human-readable messages.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub table_id: i64,
    pub status: OrderStatus,
    /// Sum of line totals, fixed at creation time
    pub total_amount: Decimal,
    pub estimated_delivery_time: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order line item; `price` is the line total (unit price × quantity)
/// snapshotted at order time, independent of later menu price changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub stall_id: Option<i64>,
    pub quantity: i32,
    pub price: Decimal,
    pub special_instructions: String,
    pub created_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub restaurant_id: i64,
    pub table_id: i64,
    pub items: Vec<OrderItemCreate>,
}

/// Order line item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub stall_id: Option<i64>,
    pub special_instructions: Option<String>,
}

impl OrderItemCreate {
    /// Line total at the given unit price; this is the value snapshotted
    /// onto the persisted order item.
    pub fn line_total(&self, unit_price: Decimal) -> Decimal {
        unit_price * Decimal::from(self.quantity)
    }
}

/// Update status payload (staff-driven transitions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdateStatus {
    pub status: OrderStatus,
}

/// Order with its line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    const ALL: [OrderStatus; 6] = [Pending, Confirmed, Preparing, Ready, Delivered, Cancelled];

    #[test]
    fn forward_chain_is_legal_stepwise() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Delivered));
    }

    #[test]
    fn pending_can_be_cancelled() {
        assert!(Pending.can_transition_to(Cancelled));
    }

    #[test]
    fn cancel_is_only_legal_from_pending() {
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Preparing.can_transition_to(Cancelled));
        assert!(!Ready.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn no_backward_or_skipping_transitions() {
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Preparing));
        assert!(!Pending.can_transition_to(Delivered));
        assert!(!Ready.can_transition_to(Confirmed));
    }

    #[test]
    fn terminal_states_admit_nothing() {
        for next in ALL {
            assert!(!Delivered.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
        assert!(Delivered.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Pending.is_terminal());
        assert!(!Ready.is_terminal());
    }

    #[test]
    fn self_transitions_are_illegal() {
        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn line_totals_are_exact_decimal_sums() {
        let line = |menu_item_id: i64, quantity: i32| OrderItemCreate {
            menu_item_id,
            quantity,
            stall_id: None,
            special_instructions: None,
        };

        // 3 × 9.99 + 1 × 0.01 = 29.98, with no binary-float drift
        let total =
            line(1, 3).line_total(Decimal::new(999, 2)) + line(2, 1).line_total(Decimal::new(1, 2));
        assert_eq!(total, Decimal::new(2998, 2));
        assert_eq!(total.to_string(), "29.98");
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(serde_json::to_string(&Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&Cancelled).unwrap(), "\"cancelled\"");
        let status: OrderStatus = serde_json::from_str("\"preparing\"").unwrap();
        assert_eq!(status, Preparing);
    }
}
