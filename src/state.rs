//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::LinkService;

/// Dependencies built once at startup and shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
