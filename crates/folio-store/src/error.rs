//! Error types for the store containers.

use thiserror::Error;

use folio_core::ValidationError;

/// Errors that can occur during bag operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with the requested title. Recoverable: callers decide
    /// whether to treat this as a no-op or surface it.
    #[error("bag {bag:?} has no item titled {title:?}")]
    ItemNotFound { bag: String, title: String },

    /// An identity field failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
