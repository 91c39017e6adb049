//! Database access layer
//!
//! Raw-SQL queries via sqlx over the shared `PgPool`. Multi-row invariants
//! (order + line items, balance + ledger entry) are wrapped in explicit
//! transactions; everything else is a single bounded statement.

pub mod menu_items;
pub mod notifications;
pub mod orders;
pub mod restaurants;
pub mod stalls;
pub mod tables;
pub mod wallet;
