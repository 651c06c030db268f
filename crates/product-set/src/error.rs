//! Domain errors shared by the set item, composition and SKU-validation code.

use thiserror::Error;

/// Errors raised by the product-set domain logic.
///
/// `InvalidInput` and `SkuConflict` are meant to be shown to whoever filled in the
/// offending form field. `NotFound` is only surfaced where a missing entity is fatal
/// (e.g. adding a deleted set to the cart); composition skips unresolved variations
/// instead. `Lookup` wraps a failing collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Malformed construction arguments (missing ID, bad quantity, bad price).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The SKU is already used by another product set or by a variation.
    #[error("The SKU {0} is already in use and must be unique.")]
    SkuConflict(String),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A lookup or calculation collaborator failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),
}

impl DomainError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }
}
