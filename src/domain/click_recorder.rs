//! Detached click recording.
//!
//! A redirect must never wait on analytics. Each click is handed to its own
//! Tokio task, so dropping or timing out the originating request does not
//! abort a recording that already started. Failures are visible only through
//! logs and the `snip_click_record_failures_total` counter.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::entities::{ClickEvent, ClickMetadata};
use crate::domain::repositories::{ClickRepository, LinkRepository};

/// Records clicks in the background against the configured stores.
#[derive(Clone)]
pub struct ClickRecorder {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl ClickRecorder {
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Schedules recording of one click and returns immediately.
    ///
    /// The handle may be awaited by tests; production callers drop it.
    pub fn spawn(&self, short_code: String, metadata: ClickMetadata) -> JoinHandle<()> {
        let recorder = self.clone();
        tokio::spawn(async move { recorder.record(&short_code, metadata).await })
    }

    /// Increments the link's counter, then appends the detailed event.
    ///
    /// The event is skipped when the increment fails, e.g. because the link
    /// was deleted between the lookup and this task.
    pub async fn record(&self, short_code: &str, metadata: ClickMetadata) {
        if let Err(e) = self.links.increment_click_count(short_code).await {
            warn!(code = %short_code, error = %e, "Failed to increment click count");
            metrics::counter!("snip_click_record_failures_total", "stage" => "increment")
                .increment(1);
            return;
        }

        let event = ClickEvent::new(short_code, metadata);

        match self.clicks.record(event).await {
            Ok(()) => {
                debug!(code = %short_code, "Click recorded");
                metrics::counter!("snip_clicks_recorded_total").increment(1);
            }
            Err(e) => {
                warn!(code = %short_code, error = %e, "Failed to record click event");
                metrics::counter!("snip_click_record_failures_total", "stage" => "record")
                    .increment(1);
            }
        }
    }
}
