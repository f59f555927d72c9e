//! DTOs for link creation.

use serde::{Deserialize, Serialize};

use crate::application::CreatedLink;

/// Request to shorten a URL.
///
/// A missing `url` field is treated the same as an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub url: String,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLinkResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl From<CreatedLink> for CreateLinkResponse {
    fn from(link: CreatedLink) -> Self {
        Self {
            short_code: link.short_code,
            short_url: link.short_url,
            original_url: link.original_url,
        }
    }
}
