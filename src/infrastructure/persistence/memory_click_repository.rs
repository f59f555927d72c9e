//! In-memory implementation of the click repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickRepository, StoreError};

/// Process-local click history, keyed by link id.
///
/// Events are kept in arrival order and reversed on read.
#[derive(Debug, Default)]
pub struct InMemoryClickRepository {
    clicks: RwLock<HashMap<String, Vec<ClickEvent>>>,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record(&self, event: ClickEvent) -> Result<(), StoreError> {
        self.clicks
            .write()
            .await
            .entry(event.link_id.clone())
            .or_default()
            .push(event);
        Ok(())
    }

    async fn list_by_link(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, StoreError> {
        let clicks = self.clicks.read().await;
        let Some(events) = clicks.get(link_id) else {
            return Ok(Vec::new());
        };

        let take = usize::try_from(limit)
            .ok()
            .filter(|&l| l > 0)
            .map_or(events.len(), |l| l.min(events.len()));

        Ok(events.iter().rev().take(take).cloned().collect())
    }

    async fn purge_link(&self, link_id: &str) -> Result<(), StoreError> {
        self.clicks.write().await.remove(link_id);
        Ok(())
    }
}
