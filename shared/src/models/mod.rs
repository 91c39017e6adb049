//! Data models
//!
//! Shared between the server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are snowflake-style `i64`; timestamps are UTC milliseconds.

pub mod dining_table;
pub mod menu_item;
pub mod notification;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod stall;
pub mod wallet;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use notification::*;
pub use order::*;
pub use restaurant::*;
pub use review::*;
pub use stall::*;
pub use wallet::*;
