//! Error types for the Folio facade.

use folio_core::ValidationError;
use folio_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the Folio API.
#[derive(Debug, Error)]
pub enum FolioError {
    /// An identity field failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A container operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
