//! Handlers for link management endpoints (create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "short_code": "aB3xK9m",
///   "short_url": "http://localhost:8080/aB3xK9m",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, an empty URL or a URL that is
/// not absolute HTTP(S). Returns 500 if no free code was found.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(request) = payload?;

    let created = state.link_service.create_link(&request.url).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Deletes a short link and its click history.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// - **204 No Content**: Link deleted
/// - **404 Not Found**: No link with this code
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
