//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// All mutating operations must be atomic against the persisted state. A
/// backend either provides native conditional writes and counters or guards
/// the whole check-and-write sequence with a single lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local map
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis hashes
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the short code is taken. The
    /// check and the write happen as one atomic step.
    async fn create(&self, link: Link) -> Result<(), StoreError>;

    /// Finds a link by its short code.
    ///
    /// The returned value is a copy; mutating it never touches stored state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this code.
    async fn get_by_code(&self, code: &str) -> Result<Link, StoreError>;

    /// Adds one to the link's click count.
    ///
    /// Safe under any number of concurrent callers for the same code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this code.
    async fn increment_click_count(&self, code: &str) -> Result<(), StoreError>;

    /// Removes a link and releases its short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link has this code.
    async fn delete(&self, code: &str) -> Result<(), StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name reported by the health endpoint.
    fn backend_name(&self) -> &'static str;
}
