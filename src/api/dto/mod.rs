//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Service results convert into
//! response DTOs through `From` impls so handlers stay thin.

pub mod clicks;
pub mod health;
pub mod links;
pub mod stats;
