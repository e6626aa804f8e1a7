//! Error types for the Folio core.

use thiserror::Error;

/// Validation errors for the identity fields of items and bags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item title must not be empty")]
    EmptyTitle,

    #[error("bag name must not be empty")]
    EmptyName,
}
