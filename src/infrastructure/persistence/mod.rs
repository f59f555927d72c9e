//! Repository implementations.
//!
//! Two interchangeable backends implement the domain repository traits:
//!
//! - In-memory maps guarded by one reader/writer lock per store, for local
//!   development and tests
//! - Redis, using server-side scripts and native commands for every atomic
//!   step
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] / [`RedisLinkRepository`] - Link storage
//! - [`InMemoryClickRepository`] / [`RedisClickRepository`] - Click history
//! - [`NullClickRepository`] - Click store that keeps no history

pub mod memory_click_repository;
pub mod memory_link_repository;
pub mod null_click_repository;
pub mod redis_click_repository;
pub mod redis_connection;
pub mod redis_link_repository;

pub use memory_click_repository::InMemoryClickRepository;
pub use memory_link_repository::InMemoryLinkRepository;
pub use null_click_repository::NullClickRepository;
pub use redis_click_repository::RedisClickRepository;
pub use redis_connection::connect_redis;
pub use redis_link_repository::RedisLinkRepository;
