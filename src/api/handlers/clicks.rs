//! Handler for per-link click history.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::clicks::{ClicksQuery, ClicksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recorded clicks of a short link, most recent first.
///
/// # Endpoint
///
/// `GET /api/links/{code}/clicks`
///
/// # Query Parameters
///
/// - `limit` (optional): Maximum number of events. Absent, zero or negative
///   returns everything.
///
/// # Response
///
/// When the click store keeps counts only, `history_supported` is `false` and
/// `clicks` is empty.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if `limit` is not an integer.
pub async fn clicks_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    query: Result<Query<ClicksQuery>, QueryRejection>,
) -> Result<Json<ClicksResponse>, AppError> {
    let Query(params) = query?;

    let history = state
        .link_service
        .list_clicks(&code, params.limit.unwrap_or(0))
        .await?;

    Ok(Json(history.into()))
}
