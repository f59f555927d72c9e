//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client metadata captured from a redirect request.
///
/// Missing headers are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMetadata {
    pub referrer: String,
    pub user_agent: String,
    pub ip_address: String,
}

impl ClickMetadata {
    /// Builds metadata from optional header values.
    pub fn new(referrer: Option<&str>, user_agent: Option<&str>, ip_address: Option<String>) -> Self {
        Self {
            referrer: referrer.unwrap_or_default().to_string(),
            user_agent: user_agent.unwrap_or_default().to_string(),
            ip_address: ip_address.unwrap_or_default(),
        }
    }
}

/// A click event recorded when a shortened link is accessed.
///
/// Immutable once recorded. Serialized as JSON by the Redis click store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub id: String,
    pub link_id: String,
    pub clicked_at: DateTime<Utc>,
    #[serde(default)]
    pub referrer: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub ip_address: String,
}

impl ClickEvent {
    /// Creates an event for `link_id` stamped with the current UTC time.
    ///
    /// The id combines the link id with the nanosecond timestamp, which is
    /// unique for all practical purposes.
    pub fn new(link_id: &str, metadata: ClickMetadata) -> Self {
        let clicked_at = Utc::now();
        let nanos = clicked_at.timestamp_nanos_opt().unwrap_or_default();

        Self {
            id: format!("{link_id}-{nanos}"),
            link_id: link_id.to_string(),
            clicked_at,
            referrer: metadata.referrer,
            user_agent: metadata.user_agent,
            ip_address: metadata.ip_address,
        }
    }
}
