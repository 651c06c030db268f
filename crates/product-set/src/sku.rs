//! # SKU Uniqueness
//!
//! Product sets and variations are stored separately but share one storefront SKU
//! namespace. [`SkuUniquenessChecker`] validates a proposed set SKU against both.

use crate::error::DomainError;
use crate::model::ProductSetId;
use crate::ports::{SetSkuLookup, VariationSkuLookup};
use tracing::{debug, instrument};

/// Validates a proposed product set SKU.
///
/// The check is advisory: it runs before a write and can race with a concurrent one.
/// The catalog stores back it with a unique index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkuUniquenessChecker;

impl SkuUniquenessChecker {
    /// Fails with [`DomainError::SkuConflict`] if another set (other than `exclude`) or any
    /// variation already uses `sku`.
    ///
    /// An empty SKU passes without a lookup; requiring a SKU is the form's job. The set
    /// lookup runs first and a hit there skips the variation lookup.
    #[instrument(skip(sets, variations))]
    pub async fn check<S, V>(
        sku: &str,
        exclude: Option<ProductSetId>,
        sets: &S,
        variations: &V,
    ) -> Result<(), DomainError>
    where
        S: SetSkuLookup + ?Sized,
        V: VariationSkuLookup + ?Sized,
    {
        if sku.is_empty() {
            return Ok(());
        }
        if sets.set_sku_exists(sku, exclude).await? {
            debug!("SKU held by another product set");
            return Err(DomainError::SkuConflict(sku.to_string()));
        }
        if variations.variation_sku_exists(sku).await? {
            debug!("SKU held by a variation");
            return Err(DomainError::SkuConflict(sku.to_string()));
        }
        Ok(())
    }
}
