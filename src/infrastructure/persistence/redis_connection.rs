//! Shared Redis connection setup.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use crate::domain::repositories::StoreError;

/// Opens a managed Redis connection and checks it with a PING.
///
/// The returned [`ConnectionManager`] is cheap to clone and reconnects on its
/// own, so both Redis repositories share one.
///
/// # Errors
///
/// Returns [`StoreError::Backend`] if the URL is invalid, the server cannot be
/// reached, or the PING fails.
pub async fn connect_redis(redis_url: &str) -> Result<ConnectionManager, StoreError> {
    let client =
        Client::open(redis_url).map_err(|e| StoreError::backend("invalid Redis URL", e))?;

    let manager = ConnectionManager::new(client)
        .await
        .map_err(|e| StoreError::backend("connecting to Redis", e))?;

    let mut conn = manager.clone();
    conn
        .ping::<()>()
        .await
        .map_err(|e| StoreError::backend("Redis PING", e))?;

    info!("✓ Connected to Redis");

    Ok(manager)
}
