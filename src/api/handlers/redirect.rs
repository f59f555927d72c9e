//! Handler for short URL redirect.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::domain::entities::ClickMetadata;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The referrer, user agent and client address are captured from the request
/// and handed to a detached task together with the counter increment. The
/// redirect is answered without waiting for either.
///
/// # Response
///
/// **301 Moved Permanently** with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let metadata = ClickMetadata::new(
        header_str(&headers, header::REFERER),
        header_str(&headers, header::USER_AGENT),
        Some(client_ip(&headers, peer)),
    );

    let url = state.link_service.redirect(&code, metadata).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]))
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
