//! Errors reported by storage implementations.

use std::error::Error as StdError;

/// Failure of a repository operation.
///
/// [`StoreError::NotFound`] and [`StoreError::AlreadyExists`] are part of the
/// repository contract; every other variant is a storage fault.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("link not found")]
    NotFound,

    #[error("short code already exists")]
    AlreadyExists,

    #[error("corrupt record for {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("{context}")]
    Backend {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl StoreError {
    /// Wraps a backend failure with the operation that triggered it.
    pub fn backend(
        context: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Backend {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Flags a stored record that cannot be decoded.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
