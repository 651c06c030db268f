//! # Set Items Listing
//!
//! The "set consisting of" block shown on a product set page: a title followed by every
//! part of the set, each priced for the viewing customer and store.

use crate::composer::SetComposer;
use crate::error::DomainError;
use crate::model::ProductSet;
use crate::ports::{AdjustmentType, PriceCalculator, PriceContext, VariationLookup};
use crate::set_item::SetItem;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub const DEFAULT_LISTING_TITLE: &str = "Set consisting of:";

/// Display settings of the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    pub title: String,
    /// Adjustments applied to the part prices. Empty shows catalog prices.
    #[serde(default)]
    pub adjustment_types: Vec<AdjustmentType>,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_LISTING_TITLE.to_string(),
            adjustment_types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetItemsListing {
    pub title: String,
    pub items: Vec<SetItem>,
}

impl SetItemsListing {
    /// Builds the listing for `set`, or `None` if the set has no configured parts.
    #[instrument(skip_all, fields(product_set_id = %set.id))]
    pub async fn build<L, C>(
        set: &ProductSet,
        settings: &ListingSettings,
        variations: &L,
        calculator: &C,
        context: &PriceContext,
    ) -> Result<Option<Self>, DomainError>
    where
        L: VariationLookup + ?Sized,
        C: PriceCalculator + ?Sized,
    {
        if set.items.is_empty() {
            return Ok(None);
        }
        let items = SetComposer::compose_with_pricing(
            &set.items,
            variations,
            calculator,
            context,
            &settings.adjustment_types,
        )
        .await?;
        Ok(Some(Self {
            title: settings.title.clone(),
            items,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ConfiguredItem, Price, ProductSetId, StoreId, UserId, Variation, VariationId,
    };
    use crate::pricing::{RateCalculator, RateRule};
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn set(items: Vec<ConfiguredItem>) -> ProductSet {
        ProductSet {
            id: ProductSetId(1),
            set_type: "default".into(),
            title: "Starter kit".into(),
            sku: "STARTER".into(),
            price: Price::parse("30.00", "USD").unwrap(),
            owner_id: UserId(1),
            published: true,
            store_ids: vec![StoreId(1)],
            items,
        }
    }

    fn variations() -> HashMap<VariationId, Variation> {
        let brush = Variation::new(VariationId(1), "BRUSH", "Brush", Price::parse("20.00", "USD").unwrap());
        [(brush.id, brush)].into_iter().collect()
    }

    fn context() -> PriceContext {
        PriceContext {
            customer_id: Some(UserId(3)),
            store_id: StoreId(1),
        }
    }

    #[tokio::test]
    async fn test_listing_applies_selected_adjustments() {
        let calculator = RateCalculator::new(vec![
            RateRule {
                adjustment_type: AdjustmentType::Promotion,
                percent: Decimal::from(-25),
                store_id: None,
            },
            RateRule {
                adjustment_type: AdjustmentType::Tax,
                percent: Decimal::from(10),
                store_id: None,
            },
        ]);
        let settings = ListingSettings {
            adjustment_types: vec![AdjustmentType::Promotion],
            ..ListingSettings::default()
        };
        let set = set(vec![ConfiguredItem::new(VariationId(1), Decimal::TWO).unwrap()]);

        let listing = SetItemsListing::build(&set, &settings, &variations(), &calculator, &context())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(listing.title, "Set consisting of:");
        assert_eq!(listing.items.len(), 1);
        assert_eq!(
            listing.items[0].unit_price(),
            Some(&Price::parse("15.00", "USD").unwrap())
        );
    }

    #[tokio::test]
    async fn test_empty_set_has_no_listing() {
        let listing = SetItemsListing::build(
            &set(Vec::new()),
            &ListingSettings::default(),
            &variations(),
            &RateCalculator::default(),
            &context(),
        )
        .await
        .unwrap();
        assert!(listing.is_none());
    }
}
