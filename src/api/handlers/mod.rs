//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use clicks::clicks_handler;
pub use fallback::{method_not_allowed_handler, route_not_found_handler};
pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
