//! API route configuration.

use crate::api::handlers::{
    clicks_handler, create_link_handler, delete_link_handler, method_not_allowed_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`               - Create a short link
/// - `GET    /links/{code}/stats`  - Click count and metadata
/// - `GET    /links/{code}/clicks` - Recorded click history
/// - `DELETE /links/{code}`        - Delete a link and its history
///
/// A known path with any other method gets a JSON 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{code}/stats", get(stats_handler))
        .route("/links/{code}/clicks", get(clicks_handler))
        .route("/links/{code}", delete(delete_link_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
