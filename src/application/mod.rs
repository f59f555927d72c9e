//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! validation and code generation, and expose a storage-agnostic API to the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, redirect, stats, deletion and click history

pub mod services;

pub use services::{ClickHistory, CreatedLink, LinkService, LinkServiceConfig, LinkStats};
