//! # snip
//!
//! A URL shortening service built with Axum, with in-memory or Redis storage.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and detached click recording
//! - **Application Layer** ([`application`]) - Link lifecycle orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and Redis repositories
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random fixed-length codes over an unambiguous 55-character alphabet
//! - Collision-safe creation through atomic conditional writes with bounded retries
//! - Fire-and-forget click counting and per-click history
//! - Storage backend chosen at startup
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory storage
//! cargo run
//!
//! # Redis storage
//! STORAGE_BACKEND=redis REDIS_URL="redis://localhost:6379" cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{LinkService, LinkServiceConfig};
    pub use crate::domain::entities::{ClickEvent, ClickMetadata, Link};
    pub use crate::domain::repositories::{ClickRepository, LinkRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
