//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage seam of the service: the application layer
//! only talks to them, and the backend is chosen once at startup.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage with atomic create and counters
//! - [`ClickRepository`] - Append-only click history
//!
//! # Testing
//!
//! See `tests/repository_redis.rs` and the in-memory implementations' unit tests.

pub mod click_repository;
pub mod error;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use error::StoreError;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
