//! Responses for requests that match no route.

use crate::error::AppError;

/// Answers any path without a route with the standard JSON error body.
pub async fn route_not_found_handler() -> AppError {
    AppError::RouteNotFound
}

/// Answers a known path requested with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
