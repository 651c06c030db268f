//! # Set Composition
//!
//! Turns a set's stored (variation, quantity) configuration into the [`SetItem`]s that
//! describe it right now.
//!
//! - Output order is the stored order; it is the display order.
//! - A variation that no longer resolves is skipped with a warning, never fatal: one stale
//!   reference must not hide the rest of the set. The output is therefore shorter than the
//!   input exactly when some lookups came back empty.
//! - A failing lookup or calculator (as opposed to an empty answer) aborts with its error.
//! - Composition never derives the set's own sale price; a set sells at its fixed price.

use crate::error::DomainError;
use crate::model::{ConfiguredItem, Variation};
use crate::ports::{AdjustmentType, PriceCalculator, PriceContext, VariationLookup};
use crate::set_item::SetItem;
use tracing::{debug, instrument, warn};

/// Builds set compositions from stored configuration pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetComposer;

impl SetComposer {
    /// Composes the set items, each carrying its variation's catalog price.
    #[instrument(skip_all, fields(pairs = pairs.len()))]
    pub async fn compose<L>(pairs: &[ConfiguredItem], lookup: &L) -> Result<Vec<SetItem>, DomainError>
    where
        L: VariationLookup + ?Sized,
    {
        let resolved = Self::resolve(pairs, lookup).await?;
        resolved
            .into_iter()
            .map(|(variation, pair)| SetItem::from_variation(&variation, pair.quantity))
            .collect()
    }

    /// Composes the set items and replaces each catalog price with the price `calculator`
    /// produces for `context`, applying only `adjustment_types`.
    #[instrument(skip_all, fields(pairs = pairs.len(), store = %context.store_id))]
    pub async fn compose_with_pricing<L, C>(
        pairs: &[ConfiguredItem],
        lookup: &L,
        calculator: &C,
        context: &PriceContext,
        adjustment_types: &[AdjustmentType],
    ) -> Result<Vec<SetItem>, DomainError>
    where
        L: VariationLookup + ?Sized,
        C: PriceCalculator + ?Sized,
    {
        let resolved = Self::resolve(pairs, lookup).await?;
        let mut items = Vec::with_capacity(resolved.len());
        for (variation, pair) in resolved {
            let item = SetItem::from_variation(&variation, pair.quantity)?;
            let calculation = calculator
                .calculate(&variation, pair.quantity, context, adjustment_types)
                .await?;
            items.push(item.with_unit_price(calculation.calculated_price));
        }
        Ok(items)
    }

    async fn resolve<'a, L>(
        pairs: &'a [ConfiguredItem],
        lookup: &L,
    ) -> Result<Vec<(Variation, &'a ConfiguredItem)>, DomainError>
    where
        L: VariationLookup + ?Sized,
    {
        let mut resolved = Vec::with_capacity(pairs.len());
        for pair in pairs {
            match lookup.variation(pair.variation_id).await? {
                Some(variation) => resolved.push((variation, pair)),
                None => warn!(variation_id = %pair.variation_id, "Skipping unresolved variation"),
            }
        }
        debug!(resolved = resolved.len(), "Resolved variations");
        Ok(resolved)
    }
}
