//! # Store Errors
//!
//! Errors raised by the store plumbing itself, independent of any entity.

/// Errors that can occur within a catalog store or its client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("SKU already in use: {0}")]
    DuplicateSku(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Returns the entity error of type `E` wrapped by this error, if any.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            StoreError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
