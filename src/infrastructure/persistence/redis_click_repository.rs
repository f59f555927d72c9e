//! Redis implementation of the click repository.
//!
//! Events for a link live in a list at `{prefix}clicks:{link_id}`, one JSON
//! document per entry. New events are pushed to the head, so a plain range
//! read is already most-recent-first.

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickRepository, StoreError};

#[derive(Clone)]
pub struct RedisClickRepository {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisClickRepository {
    pub fn new(conn: ConnectionManager, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    fn build_key(&self, link_id: &str) -> String {
        clicks_key(&self.key_prefix, link_id)
    }
}

pub(crate) fn clicks_key(prefix: &str, link_id: &str) -> String {
    format!("{prefix}clicks:{link_id}")
}

/// Inclusive LRANGE stop index for a listing limit. Non-positive means all.
fn range_stop(limit: i64) -> isize {
    if limit <= 0 {
        -1
    } else {
        isize::try_from(limit - 1).unwrap_or(isize::MAX)
    }
}

#[async_trait]
impl ClickRepository for RedisClickRepository {
    async fn record(&self, event: ClickEvent) -> Result<(), StoreError> {
        let key = self.build_key(&event.link_id);
        let payload = serde_json::to_string(&event)
            .map_err(|e| StoreError::backend("encoding click event", e))?;

        let mut conn = self.conn.clone();
        let _: i64 = conn
            .lpush(&key, payload)
            .await
            .map_err(|e| StoreError::backend("redis LPUSH", e))?;

        Ok(())
    }

    async fn list_by_link(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, StoreError> {
        let key = self.build_key(link_id);
        let mut conn = self.conn.clone();

        let raw: Vec<String> = conn
            .lrange(&key, 0, range_stop(limit))
            .await
            .map_err(|e| StoreError::backend("redis LRANGE", e))?;

        raw.iter()
            .map(|entry| {
                serde_json::from_str::<ClickEvent>(entry)
                    .map_err(|e| StoreError::corrupt(&key, e.to_string()))
            })
            .collect()
    }

    async fn purge_link(&self, link_id: &str) -> Result<(), StoreError> {
        let key = self.build_key(link_id);
        let mut conn = self.conn.clone();

        let _: i64 = conn
            .del(&key)
            .await
            .map_err(|e| StoreError::backend("redis DEL", e))?;

        Ok(())
    }
}
