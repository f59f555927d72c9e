//! Domain layer containing business entities and logic.
//!
//! Defines the entities, the storage contracts and the detached click
//! recorder, independent of any concrete backend or transport.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_recorder`] - Detached click counting and history recording
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler calls [`crate::application::services::LinkService::redirect`]
//! 2. The service resolves the link and hands the click to [`click_recorder::ClickRecorder`]
//! 3. The recorder spawns a task that increments the counter, then appends a
//!    [`entities::ClickEvent`] via [`repositories::ClickRepository`]
//! 4. The redirect response is returned without waiting for step 3

pub mod click_recorder;
pub mod entities;
pub mod repositories;
