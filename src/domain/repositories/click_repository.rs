//! Repository trait for click history.

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// Backends that only keep aggregate counts report
/// [`ClickRepository::supports_history`] as `false` and list nothing, so
/// callers can tell "no clicks yet" apart from "history not kept".
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryClickRepository`]
/// - [`crate::infrastructure::persistence::RedisClickRepository`]
/// - [`crate::infrastructure::persistence::NullClickRepository`] - history disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event under its owning link.
    ///
    /// # Errors
    ///
    /// Only storage faults.
    async fn record(&self, event: ClickEvent) -> Result<(), StoreError>;

    /// Lists a link's events, most recent first.
    ///
    /// A `limit` of zero or less, or larger than the number of events, returns
    /// everything. Unknown links yield an empty list.
    async fn list_by_link(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, StoreError>;

    /// Drops every event recorded for a link.
    async fn purge_link(&self, link_id: &str) -> Result<(), StoreError>;

    /// Whether this backend keeps individual events.
    fn supports_history(&self) -> bool {
        true
    }
}
