//! Click store that keeps no per-click history.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickRepository, StoreError};

/// A click repository that discards events.
///
/// Used when only aggregate click counts are wanted: the counter still moves
/// through the link store, but individual events are dropped and listing
/// always yields an empty result with [`ClickRepository::supports_history`]
/// reporting `false`.
pub struct NullClickRepository;

impl NullClickRepository {
    pub fn new() -> Self {
        debug!("Using NullClickRepository (click history disabled)");
        Self
    }
}

impl Default for NullClickRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickRepository for NullClickRepository {
    async fn record(&self, event: ClickEvent) -> Result<(), StoreError> {
        debug!(link_id = %event.link_id, referrer = %event.referrer, "Click not stored");
        Ok(())
    }

    async fn list_by_link(&self, _link_id: &str, _limit: i64) -> Result<Vec<ClickEvent>, StoreError> {
        Ok(Vec::new())
    }

    async fn purge_link(&self, _link_id: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn supports_history(&self) -> bool {
        false
    }
}
