//! Redis implementation of the link repository.
//!
//! Each link is a hash at `{prefix}link:{code}` with the fields
//! `short_code`, `original_url`, `created_at` (RFC 3339) and `click_count`.
//! Conditional create and increment run as Lua scripts so the existence check
//! and the write are one atomic step on the server.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use redis::{AsyncCommands, Script, aio::ConnectionManager};
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, StoreError};

const CREATE_SCRIPT: &str = r"
if redis.call('EXISTS', KEYS[1]) == 1 then
    return 0
end
redis.call('HSET', KEYS[1],
    'short_code', ARGV[1],
    'original_url', ARGV[2],
    'created_at', ARGV[3],
    'click_count', ARGV[4])
return 1
";

const INCREMENT_SCRIPT: &str = r"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return -1
end
return redis.call('HINCRBY', KEYS[1], 'click_count', 1)
";

/// Link storage in Redis hashes.
#[derive(Clone)]
pub struct RedisLinkRepository {
    conn: ConnectionManager,
    key_prefix: String,
    create_script: Script,
    increment_script: Script,
}

impl RedisLinkRepository {
    pub fn new(conn: ConnectionManager, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
            create_script: Script::new(CREATE_SCRIPT),
            increment_script: Script::new(INCREMENT_SCRIPT),
        }
    }

    fn build_key(&self, code: &str) -> String {
        link_key(&self.key_prefix, code)
    }
}

pub(crate) fn link_key(prefix: &str, code: &str) -> String {
    format!("{prefix}link:{code}")
}

/// Rebuilds a link from its hash fields. An empty map means the key is absent.
fn link_from_fields(key: &str, mut fields: HashMap<String, String>) -> Result<Link, StoreError> {
    if fields.is_empty() {
        return Err(StoreError::NotFound);
    }

    let mut take = |name: &str| {
        fields
            .remove(name)
            .ok_or_else(|| StoreError::corrupt(key, format!("missing field {name}")))
    };

    let short_code = take("short_code")?;
    let original_url = take("original_url")?;
    let created_at = take("created_at")?;
    let click_count = take("click_count")?;

    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| StoreError::corrupt(key, format!("created_at: {e}")))?
        .with_timezone(&Utc);
    let click_count = click_count
        .parse::<i64>()
        .map_err(|e| StoreError::corrupt(key, format!("click_count: {e}")))?;

    Ok(Link {
        short_code,
        original_url,
        created_at,
        click_count,
    })
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn create(&self, link: Link) -> Result<(), StoreError> {
        let key = self.build_key(&link.short_code);
        let mut conn = self.conn.clone();

        let created: i64 = self
            .create_script
            .key(&key)
            .arg(&link.short_code)
            .arg(&link.original_url)
            .arg(link.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true))
            .arg(link.click_count)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| StoreError::backend("redis create link", e))?;

        if created == 0 {
            return Err(StoreError::AlreadyExists);
        }

        debug!(code = %link.short_code, "Link stored in Redis");
        Ok(())
    }

    async fn get_by_code(&self, code: &str) -> Result<Link, StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        let fields: HashMap<String, String> = conn
            .hgetall(&key)
            .await
            .map_err(|e| StoreError::backend("redis HGETALL", e))?;

        link_from_fields(&key, fields)
    }

    async fn increment_click_count(&self, code: &str) -> Result<(), StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        let count: i64 = self
            .increment_script
            .key(&key)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| StoreError::backend("redis increment click count", e))?;

        if count < 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        let key = self.build_key(code);
        let mut conn = self.conn.clone();

        let removed: i64 = conn
            .del(&key)
            .await
            .map_err(|e| StoreError::backend("redis DEL", e))?;

        if removed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::backend("redis PING", e))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
