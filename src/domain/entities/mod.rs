//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Persisted
//! records are owned by the storage layer; services only ever hold short-lived
//! copies.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping, keyed by its short code
//! - [`ClickEvent`] - A single redirect recorded for analytics
//! - [`ClickMetadata`] - Request metadata captured at redirect time

pub mod click;
pub mod link;

pub use click::{ClickEvent, ClickMetadata};
pub use link::Link;
