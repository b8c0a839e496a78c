//! Error types for the Shop actor.

use thiserror::Error;

/// Errors that can occur during shop operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    /// No shop is registered under this phone number.
    #[error("Shop not found: {0}")]
    NotFound(String),

    /// The session may not perform this operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The shop directory could not be reached.
    #[error("Shop directory unavailable: {0}")]
    Retrieval(String),

    /// The registration data is invalid.
    #[error("Shop validation error: {0}")]
    Validation(String),
}
