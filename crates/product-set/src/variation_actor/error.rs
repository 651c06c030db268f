//! Error types for the Variation store.

use thiserror::Error;

/// Errors that can occur during variation operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VariationError {
    /// The requested variation was not found.
    #[error("Variation not found: {0}")]
    NotFound(String),

    /// The variation data is invalid (e.g. an empty SKU).
    #[error("Variation validation error: {0}")]
    ValidationError(String),

    /// Another variation already uses the SKU.
    #[error("The SKU {0} is already in use and must be unique.")]
    DuplicateSku(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for VariationError {
    fn from(msg: String) -> Self {
        VariationError::ActorCommunicationError(msg)
    }
}
