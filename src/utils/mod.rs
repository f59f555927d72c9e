//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Input URL validation
//! - [`client_ip`] - Client address extraction from proxy headers

pub mod client_ip;
pub mod code_generator;
pub mod url_validator;
