//! Shared types for the Tably ordering backend
//!
//! Domain models, the unified error system, and small utilities used by the
//! server crate. Database row derives are behind the `db` feature so API
//! consumers can use the models without pulling in sqlx.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
