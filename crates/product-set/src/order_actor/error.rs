//! Error types for the Order store.

use crate::error::DomainError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order, or an entity it references, was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with a store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<DomainError> for OrderError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(what) => OrderError::NotFound(what),
            DomainError::InvalidInput(msg) => OrderError::ValidationError(msg),
            DomainError::SkuConflict(_) => OrderError::ValidationError(e.to_string()),
            DomainError::Lookup(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}
