//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and metadata of a short link.
///
/// # Endpoint
///
/// `GET /api/links/{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xK9m",
///   "original_url": "https://example.com",
///   "click_count": 42,
///   "created_at": "2024-03-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
