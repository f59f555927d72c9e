//! DTOs for click history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ClickHistory;
use crate::domain::entities::ClickEvent;

/// Query parameters for `GET /api/links/{code}/clicks`.
#[derive(Debug, Default, Deserialize)]
pub struct ClicksQuery {
    /// Maximum number of events; absent or non-positive returns all.
    pub limit: Option<i64>,
}

/// Single recorded click.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClickInfo {
    pub id: String,
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub user_agent: String,
    pub ip_address: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(event: ClickEvent) -> Self {
        Self {
            id: event.id,
            clicked_at: event.clicked_at,
            referrer: event.referrer,
            user_agent: event.user_agent,
            ip_address: event.ip_address,
        }
    }
}

/// Click history of a link, most recent first.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClicksResponse {
    pub short_code: String,
    pub history_supported: bool,
    pub clicks: Vec<ClickInfo>,
}

impl From<ClickHistory> for ClicksResponse {
    fn from(history: ClickHistory) -> Self {
        Self {
            short_code: history.short_code,
            history_supported: history.history_supported,
            clicks: history.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
