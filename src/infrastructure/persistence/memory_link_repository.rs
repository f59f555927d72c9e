//! In-memory implementation of the link repository.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, StoreError};

/// Process-local link storage.
///
/// One reader/writer lock guards the whole map: lookups share it, while
/// create, increment and delete hold it exclusively for their full
/// check-and-write sequence. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, link: Link) -> Result<(), StoreError> {
        let mut links = self.links.write().await;

        match links.entry(link.short_code.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(())
            }
        }
    }

    async fn get_by_code(&self, code: &str) -> Result<Link, StoreError> {
        self.links
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn increment_click_count(&self, code: &str) -> Result<(), StoreError> {
        let mut links = self.links.write().await;
        let link = links.get_mut(code).ok_or(StoreError::NotFound)?;
        link.click_count += 1;
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        self.links
            .write()
            .await
            .remove(code)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
