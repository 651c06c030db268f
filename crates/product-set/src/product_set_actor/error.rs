//! Error types for the Product Set store.

use crate::error::DomainError;
use thiserror::Error;

/// Errors that can occur during product set operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductSetError {
    /// The requested product set was not found.
    #[error("Product set not found: {0}")]
    NotFound(String),

    /// The product set data is invalid (e.g. a missing title).
    #[error("Product set validation error: {0}")]
    ValidationError(String),

    /// Another product set or a variation already uses the SKU.
    #[error("The SKU {0} is already in use and must be unique.")]
    SkuConflict(String),

    /// An error occurred while communicating with a store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductSetError {
    fn from(msg: String) -> Self {
        ProductSetError::ActorCommunicationError(msg)
    }
}

impl From<DomainError> for ProductSetError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ProductSetError::ValidationError(msg),
            DomainError::SkuConflict(sku) => ProductSetError::SkuConflict(sku),
            DomainError::NotFound(what) => ProductSetError::NotFound(what),
            DomainError::Lookup(msg) => ProductSetError::ActorCommunicationError(msg),
        }
    }
}
