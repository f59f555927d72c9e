//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// The short code is both the public identifier and the primary key. The
/// original URL never changes once the link is stored; the click count only
/// moves through [`crate::domain::repositories::LinkRepository::increment_click_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a fresh link with a zero click count, stamped with the current UTC time.
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
            created_at: Utc::now(),
            click_count: 0,
        }
    }

    /// Identity used by click events to reference this link.
    pub fn id(&self) -> &str {
        &self.short_code
    }
}
